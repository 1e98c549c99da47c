//! Reusable Dioxus RSX components for the fleet dashboard filters.

mod date_range_control;
mod filter_bar;
mod icons;
mod menu_entry;
mod popover;
mod range_calendar;
mod selector_menu;

pub use date_range_control::DateRangeControl;
pub use filter_bar::FilterBar;
pub use icons::{CalendarIcon, CheckCircleIcon, ChevronDownIcon, FilterIcon, FilterXIcon};
pub use menu_entry::MenuEntry;
pub use popover::Popover;
pub use range_calendar::RangeCalendar;
pub use selector_menu::SelectorMenu;
