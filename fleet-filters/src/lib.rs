//! Filter state, labels and view model for the fleet operations dashboard.
//!
//! This crate has no UI framework dependency. It provides:
//! - `state`: the parent-owned `FilterState` and the parent-side reducer
//! - `presets`: the five fixed date-range shortcuts
//! - `labels`: trigger and item text for every selector
//! - `catalog`: facility and facility-scoped mission-type lists
//! - `intent`: the callback intents a filter bar can emit
//! - `calendar`: range-selection rules and month grids for the calendar control
//! - `view`: a render-independent model of the filter bar for both layouts

pub mod calendar;
pub mod catalog;
pub mod intent;
pub mod labels;
pub mod presets;
pub mod state;
pub mod view;

pub use catalog::FacilityCatalog;
pub use intent::{FilterIntent, FilterSink};
pub use presets::DatePreset;
pub use state::{DateBounds, FilterState, MetricOption};
pub use view::{DateControlVariant, FilterBarView, Layout, MobilePanel};
