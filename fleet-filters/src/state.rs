//! Filter selection model.
//!
//! `FilterState` is owned by whatever renders the filter bar. The bar only reads
//! it; every change comes back as a [`FilterIntent`] and the owner decides how to
//! fold it in (see [`FilterState::apply`]).

use crate::intent::FilterIntent;
use crate::presets::DatePreset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Facility sentinel meaning "no facility filter".
pub const ALL_FACILITIES: &str = "All";
/// Mission-type sentinel meaning "no mission-type filter".
pub const ALL_MISSION_TYPES: &str = "All";
/// Metric sentinel meaning "every metric visible". Lowercase, unlike the others.
pub const ALL_METRICS: &str = "all";

/// Custom date range bounds. Either end may be unset while the user is picking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// A selectable metric column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOption {
    pub id: String,
    pub label: String,
}

impl MetricOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Current filter selection for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// One facility name or [`ALL_FACILITIES`]
    pub selected_hospital: String,
    /// Selected mission types, may contain [`ALL_MISSION_TYPES`]
    pub selected_robot_types: Vec<String>,
    /// Label of the active preset
    pub date_range: String,
    /// Custom bounds picked in the calendar
    pub date: DateBounds,
    /// Visible metric ids, may contain [`ALL_METRICS`]
    pub visible_metrics: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_hospital: ALL_FACILITIES.to_string(),
            selected_robot_types: vec![ALL_MISSION_TYPES.to_string()],
            date_range: DatePreset::Last7Days.label().to_string(),
            date: DateBounds::default(),
            visible_metrics: vec![ALL_METRICS.to_string()],
        }
    }
}

impl FilterState {
    pub fn includes_all_types(&self) -> bool {
        self.has_type(ALL_MISSION_TYPES)
    }

    pub fn has_type(&self, robot_type: &str) -> bool {
        self.selected_robot_types.iter().any(|t| t == robot_type)
    }

    pub fn includes_all_metrics(&self) -> bool {
        self.shows_metric(ALL_METRICS)
    }

    pub fn shows_metric(&self, metric_id: &str) -> bool {
        self.visible_metrics.iter().any(|m| m == metric_id)
    }

    /// Fold an intent emitted by the filter bar into the selection.
    ///
    /// This is the dashboard's policy, not the filter bar's: the bar never calls it.
    /// Emptied multi-selections fall back to their sentinel, and switching facility
    /// resets mission types because their candidate list is facility-scoped.
    pub fn apply(&mut self, intent: FilterIntent) {
        match intent {
            FilterIntent::HospitalChange(hospital) => {
                if hospital != self.selected_hospital {
                    self.selected_robot_types = vec![ALL_MISSION_TYPES.to_string()];
                }
                self.selected_hospital = hospital;
            }
            FilterIntent::RobotTypeChange(robot_type) => {
                if robot_type == ALL_MISSION_TYPES {
                    self.selected_robot_types = vec![robot_type];
                } else {
                    self.selected_robot_types.retain(|t| t != ALL_MISSION_TYPES);
                    if !self.has_type(&robot_type) {
                        self.selected_robot_types.push(robot_type);
                    }
                }
            }
            FilterIntent::RemoveRobotType(robot_type) => {
                self.selected_robot_types.retain(|t| *t != robot_type);
                if self.selected_robot_types.is_empty() {
                    self.selected_robot_types.push(ALL_MISSION_TYPES.to_string());
                }
            }
            FilterIntent::DateRangeChange(label) => {
                self.date_range = label;
            }
            FilterIntent::CustomDateChange(bounds) => {
                self.date = bounds;
            }
            FilterIntent::MetricToggle(metric_id) => {
                if metric_id == ALL_METRICS {
                    self.visible_metrics = vec![metric_id];
                    return;
                }
                self.visible_metrics.retain(|m| m != ALL_METRICS);
                if self.shows_metric(&metric_id) {
                    self.visible_metrics.retain(|m| *m != metric_id);
                } else {
                    self.visible_metrics.push(metric_id);
                }
                if self.visible_metrics.is_empty() {
                    self.visible_metrics.push(ALL_METRICS.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(state: &FilterState) -> Vec<&str> {
        state.selected_robot_types.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_default_state_uses_sentinels() {
        let state = FilterState::default();
        assert_eq!(state.selected_hospital, "All");
        assert!(state.includes_all_types());
        assert!(state.includes_all_metrics());
        assert_eq!(state.date_range, "Last 7 Days");
        assert!(state.date.is_empty());
    }

    #[test]
    fn test_robot_type_change_replaces_sentinel() {
        let mut state = FilterState::default();
        state.apply(FilterIntent::RobotTypeChange("Delivery".into()));
        state.apply(FilterIntent::RobotTypeChange("Disinfection".into()));
        state.apply(FilterIntent::RobotTypeChange("Delivery".into()));
        assert_eq!(types(&state), vec!["Delivery", "Disinfection"]);

        state.apply(FilterIntent::RobotTypeChange("All".into()));
        assert_eq!(types(&state), vec!["All"]);
    }

    #[test]
    fn test_remove_last_robot_type_falls_back_to_all() {
        let mut state = FilterState::default();
        state.apply(FilterIntent::RobotTypeChange("Delivery".into()));
        state.apply(FilterIntent::RemoveRobotType("Delivery".into()));
        assert_eq!(types(&state), vec!["All"]);
    }

    #[test]
    fn test_hospital_change_resets_types_only_when_changed() {
        let mut state = FilterState::default();
        state.apply(FilterIntent::RobotTypeChange("Delivery".into()));
        state.apply(FilterIntent::HospitalChange("All".into()));
        assert_eq!(types(&state), vec!["Delivery"]);

        state.apply(FilterIntent::HospitalChange("St. Mary".into()));
        assert_eq!(state.selected_hospital, "St. Mary");
        assert_eq!(types(&state), vec!["All"]);
    }

    #[test]
    fn test_metric_toggle() {
        let mut state = FilterState::default();
        state.apply(FilterIntent::MetricToggle("uptime".into()));
        assert_eq!(state.visible_metrics, vec!["uptime".to_string()]);

        state.apply(FilterIntent::MetricToggle("missions".into()));
        state.apply(FilterIntent::MetricToggle("uptime".into()));
        assert_eq!(state.visible_metrics, vec!["missions".to_string()]);

        state.apply(FilterIntent::MetricToggle("missions".into()));
        assert!(state.includes_all_metrics());

        state.apply(FilterIntent::MetricToggle("uptime".into()));
        state.apply(FilterIntent::MetricToggle("all".into()));
        assert_eq!(state.visible_metrics, vec!["all".to_string()]);
    }

    #[test]
    fn test_date_intents_are_independent() {
        let mut state = FilterState::default();
        let from = NaiveDate::from_ymd_opt(2024, 1, 5);
        state.apply(FilterIntent::CustomDateChange(DateBounds::new(from, None)));
        state.apply(FilterIntent::DateRangeChange("Today".into()));
        assert_eq!(state.date.from, from);
        assert_eq!(state.date_range, "Today");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(FilterState::default()).unwrap();
        assert_eq!(json["selectedHospital"], "All");
        assert_eq!(json["visibleMetrics"][0], "all");
        assert!(json["date"]["from"].is_null());
    }
}
