//! One-month calendar in range-selection mode.

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use fleet_filters::calendar::MonthView;
use fleet_filters::DateBounds;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month grid where each day click emits the next range bounds.
///
/// Opens on the month of `selected.from`, or the current month when unset.
#[component]
pub fn RangeCalendar(selected: DateBounds, on_select: EventHandler<DateBounds>) -> Element {
    let mut month = use_signal(|| {
        MonthView::containing(selected.from.unwrap_or_else(|| Local::now().date_naive()))
    });
    let shown = month();
    let title = shown.title();

    rsx! {
        div {
            style: "padding: 8px; color: white; background: #14294B; border-radius: 6px;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                button {
                    r#type: "button",
                    "aria-label": "Previous month",
                    style: "background: none; border: none; color: white; cursor: pointer;",
                    onclick: move |_| month.set(shown.prev()),
                    "‹"
                }
                span { style: "font-size: 14px; font-weight: 500;", "{title}" }
                button {
                    r#type: "button",
                    "aria-label": "Next month",
                    style: "background: none; border: none; color: white; cursor: pointer;",
                    onclick: move |_| month.set(shown.next()),
                    "›"
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(7, 32px); gap: 2px; font-size: 12px; text-align: center;",
                for weekday in WEEKDAYS {
                    span { style: "color: rgba(255, 255, 255, 0.6);", "{weekday}" }
                }
                for cell in shown.weeks().into_iter().flatten() {
                    if let Some(day) = cell {
                        DayCell {
                            day,
                            in_range: selected.contains(day),
                            on_click: move |day: NaiveDate| on_select.call(selected.add_day(day)),
                        }
                    } else {
                        span {}
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(day: NaiveDate, in_range: bool, on_click: EventHandler<NaiveDate>) -> Element {
    let background = if in_range { "#F97316" } else { "transparent" };
    let label = day.day();
    rsx! {
        button {
            r#type: "button",
            style: "width: 32px; height: 32px; color: white; background: {background}; border: none; border-radius: 4px; cursor: pointer;",
            onclick: move |_| on_click.call(day),
            "{label}"
        }
    }
}
