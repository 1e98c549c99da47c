//! Intents emitted by the filter bar.
//!
//! Each user interaction produces exactly one `FilterIntent`, which is handed to a
//! [`FilterSink`]. The UI crate's sink forwards it to the matching callback prop.

use crate::state::DateBounds;

/// A requested change to the filter selection, one variant per callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    HospitalChange(String),
    RobotTypeChange(String),
    RemoveRobotType(String),
    DateRangeChange(String),
    CustomDateChange(DateBounds),
    MetricToggle(String),
}

impl FilterIntent {
    /// Name of the callback this intent is delivered to.
    pub fn callback_name(&self) -> &'static str {
        match self {
            FilterIntent::HospitalChange(_) => "on_hospital_change",
            FilterIntent::RobotTypeChange(_) => "on_robot_type_change",
            FilterIntent::RemoveRobotType(_) => "on_remove_robot_type",
            FilterIntent::DateRangeChange(_) => "on_date_range_change",
            FilterIntent::CustomDateChange(_) => "on_custom_date_change",
            FilterIntent::MetricToggle(_) => "on_metric_toggle",
        }
    }
}

/// Receiver of filter intents.
pub trait FilterSink {
    fn dispatch(&self, intent: FilterIntent);
}

/// Collects dispatched intents, for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Recorder(pub std::cell::RefCell<Vec<FilterIntent>>);

#[cfg(test)]
impl FilterSink for Recorder {
    fn dispatch(&self, intent: FilterIntent) {
        self.0.borrow_mut().push(intent);
    }
}

#[cfg(test)]
impl Recorder {
    pub(crate) fn take(&self) -> Vec<FilterIntent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}
