//! Dashboard filter bar: facility, mission type, metric and date controls.

use crate::callbacks::FilterCallbacks;
use crate::components::date_range_control::DateRangeControl;
use crate::components::icons::{FilterIcon, FilterXIcon};
use crate::components::selector_menu::SelectorMenu;
use crate::viewport::use_is_mobile;
use dioxus::prelude::*;
use fleet_filters::{
    DateBounds, DateControlVariant, FacilityCatalog, FilterBarView, FilterState, Layout,
    MetricOption, MobilePanel,
};

/// Props for FilterBar
///
/// All selection state belongs to the parent. The bar reports changes through the
/// handlers and waits for the parent to pass the next selection back in.
#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    /// Selected facility, or "All"
    pub selected_hospital: String,
    /// Selected mission types, may contain "All"
    pub selected_robot_types: Vec<String>,
    /// Active preset label
    pub date_range: String,
    /// Custom calendar bounds
    pub date: DateBounds,
    pub on_hospital_change: EventHandler<String>,
    pub on_robot_type_change: EventHandler<String>,
    pub on_remove_robot_type: EventHandler<String>,
    pub on_date_range_change: EventHandler<String>,
    pub on_custom_date_change: EventHandler<DateBounds>,
    /// Visible metric ids, may contain "all"
    #[props(default)]
    pub visible_metrics: Vec<String>,
    /// The metric selector only renders when this is set and `metric_options` is non-empty
    #[props(default)]
    pub on_metric_toggle: Option<EventHandler<String>>,
    #[props(default)]
    pub metric_options: Vec<MetricOption>,
    /// Forces a layout; the viewport decides when unset
    #[props(default)]
    pub is_mobile: Option<bool>,
    /// Facility and mission-type lists
    pub catalog: FacilityCatalog,
    /// Preset dropdown alone, or calendar plus presets
    pub date_control: DateControlVariant,
    /// Desktop selector width in pixels
    #[props(default = 185)]
    pub selector_width: u32,
}

/// Filter controls in a desktop row, or on mobile a date row with a toggle that
/// reveals the remaining selectors.
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let detected_mobile = use_is_mobile();
    let mut panel = use_signal(MobilePanel::default);

    let layout = Layout::resolve(props.is_mobile, detected_mobile);
    let sink = FilterCallbacks {
        on_hospital_change: props.on_hospital_change,
        on_robot_type_change: props.on_robot_type_change,
        on_remove_robot_type: props.on_remove_robot_type,
        on_date_range_change: props.on_date_range_change,
        on_custom_date_change: props.on_custom_date_change,
        on_metric_toggle: props.on_metric_toggle,
    };
    let state = FilterState {
        selected_hospital: props.selected_hospital.clone(),
        selected_robot_types: props.selected_robot_types.clone(),
        date_range: props.date_range.clone(),
        date: props.date,
        visible_metrics: props.visible_metrics.clone(),
    };
    let metric_options = props
        .on_metric_toggle
        .map(|_| props.metric_options.as_slice());
    let view = FilterBarView::build(
        &state,
        &props.catalog,
        metric_options,
        layout,
        panel(),
        props.date_control,
    );

    match layout {
        Layout::Mobile => {
            let expanded = view.toggle.is_some_and(|toggle| toggle.expanded);
            rsx! {
                div {
                    "data-layout": "mobile",
                    style: "display: flex; flex-direction: column; gap: 16px; width: 100%;",
                    div {
                        style: "display: flex; gap: 8px; width: 100%;",
                        div {
                            style: "width: 85%;",
                            DateRangeControl {
                                view: view.date.clone(),
                                sink,
                                width: "100%".to_string(),
                                compact: true,
                            }
                        }
                        div {
                            style: "width: 15%;",
                            button {
                                r#type: "button",
                                "aria-label": "Toggle filters",
                                "aria-expanded": "{expanded}",
                                style: "width: 100%; display: flex; align-items: center; justify-content: center; padding: 0; background: none; border: none; cursor: pointer;",
                                onclick: move |_| panel.write().toggle(),
                                if expanded {
                                    FilterXIcon {}
                                } else {
                                    FilterIcon {}
                                }
                            }
                        }
                    }
                    if let Some(facility) = view.facility {
                        div {
                            style: "width: 100%;",
                            SelectorMenu { view: facility, sink, width: "100%".to_string(), compact: true }
                        }
                    }
                    if let Some(mission_types) = view.mission_types {
                        div {
                            style: "width: 100%;",
                            SelectorMenu { view: mission_types, sink, width: "100%".to_string(), compact: true }
                        }
                    }
                    if let Some(metrics) = view.metrics {
                        div {
                            style: "width: 100%;",
                            SelectorMenu { view: metrics, sink, width: "100%".to_string(), compact: true }
                        }
                    }
                }
            }
        }
        Layout::Desktop => {
            let selector_width = format!("{}px", props.selector_width);
            rsx! {
                div {
                    "data-layout": "desktop",
                    style: "display: flex; justify-content: space-between; align-items: center; width: 100%; max-width: 100%;",
                    div {
                        style: "display: flex; gap: 8px;",
                        if let Some(facility) = view.facility {
                            SelectorMenu { view: facility, sink, width: selector_width.clone() }
                        }
                        if let Some(mission_types) = view.mission_types {
                            SelectorMenu { view: mission_types, sink, width: selector_width.clone() }
                        }
                        if let Some(metrics) = view.metrics {
                            SelectorMenu { view: metrics, sink, width: selector_width.clone() }
                        }
                    }
                    div {
                        style: "display: flex;",
                        DateRangeControl { view: view.date, sink, width: "255px".to_string() }
                    }
                }
            }
        }
    }
}
