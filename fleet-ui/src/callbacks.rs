//! Delivery of filter intents to the parent's handlers.

use dioxus::prelude::*;
use fleet_filters::{DateBounds, FilterIntent, FilterSink};

/// The callback props of a `FilterBar`, bundled so child components can share them.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterCallbacks {
    pub on_hospital_change: EventHandler<String>,
    pub on_robot_type_change: EventHandler<String>,
    pub on_remove_robot_type: EventHandler<String>,
    pub on_date_range_change: EventHandler<String>,
    pub on_custom_date_change: EventHandler<DateBounds>,
    pub on_metric_toggle: Option<EventHandler<String>>,
}

impl FilterSink for FilterCallbacks {
    fn dispatch(&self, intent: FilterIntent) {
        log::debug!("[Fleet] filter bar: {} {:?}", intent.callback_name(), intent);
        match intent {
            FilterIntent::HospitalChange(hospital) => self.on_hospital_change.call(hospital),
            FilterIntent::RobotTypeChange(robot_type) => self.on_robot_type_change.call(robot_type),
            FilterIntent::RemoveRobotType(robot_type) => {
                self.on_remove_robot_type.call(robot_type)
            }
            FilterIntent::DateRangeChange(label) => self.on_date_range_change.call(label),
            FilterIntent::CustomDateChange(bounds) => self.on_custom_date_change.call(bounds),
            FilterIntent::MetricToggle(metric_id) => match self.on_metric_toggle {
                Some(handler) => handler.call(metric_id),
                None => log::warn!("[Fleet] filter bar: no metric handler for {}", metric_id),
            },
        }
    }
}
