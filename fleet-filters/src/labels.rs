//! Display text for selector triggers, menu entries and the date control.

use crate::state::{DateBounds, ALL_FACILITIES, ALL_METRICS, ALL_MISSION_TYPES};
use chrono::NaiveDate;

/// Date pattern for the calendar trigger, e.g. "Jan 05, 2024".
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// Placeholder shown when no custom start date is set.
pub const PICK_A_DATE_RANGE: &str = "Pick a date range";

/// Facility name as shown in the trigger and the menu.
pub fn facility_label(facility: &str) -> &str {
    if facility == ALL_FACILITIES {
        "All Facilities"
    } else {
        facility
    }
}

/// Mission type as shown in a menu entry.
pub fn mission_type_item_label(robot_type: &str) -> &str {
    if robot_type == ALL_MISSION_TYPES {
        "All Mission Types"
    } else {
        robot_type
    }
}

/// Trigger text for the mission-type selector.
///
/// "All Mission Types" when the sentinel is selected, the single selection
/// verbatim, otherwise the first selection followed by "+N".
pub fn mission_type_trigger_label(selected: &[String]) -> String {
    if selected.iter().any(|t| t == ALL_MISSION_TYPES) {
        return "All Mission Types".to_string();
    }
    match selected {
        [] => String::new(),
        [only] => only.clone(),
        [first, rest @ ..] => format!("{} +{}", first, rest.len()),
    }
}

/// Count badge beside a multi-select chevron. `None` when nothing is selected
/// or the selection contains `sentinel`.
pub fn selection_badge(selected: &[String], sentinel: &str) -> Option<usize> {
    if selected.is_empty() || selected.iter().any(|s| s == sentinel) {
        None
    } else {
        Some(selected.len())
    }
}

/// Trigger text for the metric selector.
pub fn metric_trigger_label(visible: &[String]) -> String {
    if visible.iter().any(|m| m == ALL_METRICS) {
        "All Metrics".to_string()
    } else {
        format!("{} Selected", visible.len())
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Trigger text for the calendar popover.
///
/// An unset `from` always yields the placeholder, even if `to` is set.
pub fn date_trigger_label(bounds: &DateBounds) -> String {
    match (bounds.from, bounds.to) {
        (None, _) => PICK_A_DATE_RANGE.to_string(),
        (Some(from), None) => format_date(&from),
        (Some(from), Some(to)) => format!("{} - {}", format_date(&from), format_date(&to)),
    }
}
