//! Date range control: preset dropdown, optionally with a calendar popover.

use crate::callbacks::FilterCallbacks;
use crate::components::icons::{CalendarIcon, ChevronDownIcon};
use crate::components::menu_entry::MenuEntry;
use crate::components::popover::Popover;
use crate::components::range_calendar::RangeCalendar;
use dioxus::prelude::*;
use fleet_filters::view::DateControlView;
use fleet_filters::DateControlVariant;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangeControlProps {
    pub view: DateControlView,
    pub sink: FilterCallbacks,
    /// CSS width of the whole control
    pub width: String,
    #[props(default = false)]
    pub compact: bool,
}

/// Date range control in the configured variant.
#[component]
pub fn DateRangeControl(props: DateRangeControlProps) -> Element {
    let view = props.view;
    let sink = props.sink;
    let compact = props.compact;

    let presets = rsx! {
        Popover {
            trigger: rsx! {
                span {
                    style: "flex: 1; text-align: left; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{view.preset_label}"
                }
                ChevronDownIcon {}
            },
            for item in view.presets.iter() {
                MenuEntry {
                    key: "{item.key}",
                    item: item.clone(),
                    sink,
                    compact,
                }
            }
        }
    };

    match view.variant {
        DateControlVariant::PresetsOnly => rsx! {
            div {
                style: "display: flex; align-items: center; gap: 8px; width: {props.width};",
                span { style: "font-size: 12px; color: white; white-space: nowrap;", "Date Range" }
                {presets}
            }
        },
        DateControlVariant::CalendarWithPresets => {
            let label = view.calendar_label.clone().unwrap_or_default();
            let picker = view.clone();
            rsx! {
                div {
                    style: "display: flex; align-items: center; gap: 8px; width: {props.width};",
                    Popover {
                        close_on_select: false,
                        trigger: rsx! {
                            CalendarIcon {}
                            span {
                                style: "flex: 1; text-align: left; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                "{label}"
                            }
                        },
                        RangeCalendar {
                            selected: view.bounds,
                            on_select: move |bounds| picker.pick_range(bounds, &sink),
                        }
                    }
                    {presets}
                }
            }
        }
    }
}
