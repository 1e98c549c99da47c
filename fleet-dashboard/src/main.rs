//! Fleet Operations Dashboard Filters
//!
//! Mounts the shared `FilterBar` over dashboard-owned filter state.
//!
//! Data flow:
//! 1. `include_str!` embeds `data/facilities.csv` into the WASM binary.
//! 2. On mount: parse it into a `FacilityCatalog` for the facility and
//!    mission-type menus.
//! 3. Every callback from the filter bar is folded into `FilterState` via
//!    `FilterState::apply`, and the bar re-renders from the new snapshot.

use dioxus::prelude::*;
use fleet_filters::{DateControlVariant, FacilityCatalog, FilterIntent, FilterState, MetricOption};
use fleet_ui::components::FilterBar;

// Facility -> mission type pairs, embedded at compile time.
const FACILITIES_CSV: &str = include_str!("../data/facilities.csv");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fleet-filters-root"))
        .launch(App);
}

fn metric_options() -> Vec<MetricOption> {
    vec![
        MetricOption::new("all", "All Metrics"),
        MetricOption::new("missions", "Missions Completed"),
        MetricOption::new("uptime", "Uptime"),
        MetricOption::new("distance", "Distance Travelled"),
        MetricOption::new("interventions", "Manual Interventions"),
    ]
}

fn apply_intent(mut filters: Signal<FilterState>, intent: FilterIntent) {
    log::info!("[Fleet] dashboard: {:?}", intent);
    filters.write().apply(intent);
}

#[component]
fn App() -> Element {
    let filters = use_signal(FilterState::default);
    let mut loaded_catalog: Signal<Option<FacilityCatalog>> = use_signal(|| None);
    let mut error_msg: Signal<Option<String>> = use_signal(|| None);

    // ─── Parse the embedded catalog once on mount ───
    use_effect(move || match FacilityCatalog::from_csv(FACILITIES_CSV) {
        Ok(catalog) => loaded_catalog.set(Some(catalog)),
        Err(err) => {
            log::error!("[Fleet] dashboard: failed to load facilities: {:#}", err);
            error_msg.set(Some(format!("Could not load facilities: {}", err)));
        }
    });

    let snapshot = filters();
    let summary = serde_json::to_string_pretty(&snapshot).unwrap_or_default();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; background: #14294B; min-height: 100vh;",

            if let Some(err) = error_msg() {
                div {
                    style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                    strong { "Error: " }
                    "{err}"
                }
            }

            if let Some(catalog) = loaded_catalog() {
                FilterBar {
                    selected_hospital: snapshot.selected_hospital.clone(),
                    selected_robot_types: snapshot.selected_robot_types.clone(),
                    date_range: snapshot.date_range.clone(),
                    date: snapshot.date,
                    on_hospital_change: move |hospital| {
                        apply_intent(filters, FilterIntent::HospitalChange(hospital))
                    },
                    on_robot_type_change: move |robot_type| {
                        apply_intent(filters, FilterIntent::RobotTypeChange(robot_type))
                    },
                    on_remove_robot_type: move |robot_type| {
                        apply_intent(filters, FilterIntent::RemoveRobotType(robot_type))
                    },
                    on_date_range_change: move |label| {
                        apply_intent(filters, FilterIntent::DateRangeChange(label))
                    },
                    on_custom_date_change: move |bounds| {
                        apply_intent(filters, FilterIntent::CustomDateChange(bounds))
                    },
                    visible_metrics: snapshot.visible_metrics.clone(),
                    on_metric_toggle: move |metric_id: String| {
                        apply_intent(filters, FilterIntent::MetricToggle(metric_id))
                    },
                    metric_options: metric_options(),
                    catalog,
                    date_control: DateControlVariant::CalendarWithPresets,
                }

                pre {
                    style: "margin-top: 24px; padding: 12px; font-size: 11px; color: #CBD5E1; background: rgba(255, 255, 255, 0.05); border-radius: 6px;",
                    "{summary}"
                }
            } else if error_msg().is_none() {
                div {
                    style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #CBD5E1;",
                    "Loading facilities..."
                }
            }
        }
    }
}
