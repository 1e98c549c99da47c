//! Fixed date-range shortcuts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five named date ranges offered next to (or instead of) the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePreset {
    Today,
    Last7Days,
    Last30Days,
    Last90Days,
    Last180Days,
}

impl DatePreset {
    /// All presets in menu order.
    pub const ALL: [DatePreset; 5] = [
        DatePreset::Today,
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::Last90Days,
        DatePreset::Last180Days,
    ];

    /// The literal string passed to `on_date_range_change`.
    pub fn label(self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Last7Days => "Last 7 Days",
            DatePreset::Last30Days => "Last 30 Days",
            DatePreset::Last90Days => "Last 90 Days",
            DatePreset::Last180Days => "Last 180 Days",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::DatePreset;

    #[test]
    fn test_menu_order() {
        let labels: Vec<&str> = DatePreset::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Today", "Last 7 Days", "Last 30 Days", "Last 90 Days", "Last 180 Days"]
        );
    }

    #[test]
    fn test_from_label() {
        assert_eq!(DatePreset::from_label("Last 90 Days"), Some(DatePreset::Last90Days));
        assert_eq!(DatePreset::from_label("last 90 days"), None);
        assert_eq!(DatePreset::from_label("Custom"), None);
    }
}
