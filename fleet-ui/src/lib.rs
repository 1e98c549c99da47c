//! Dioxus filter bar components for the fleet operations dashboard.
//!
//! This crate provides:
//! - `components`: the `FilterBar` and the menu, popover and calendar pieces it is built from
//! - `callbacks`: routes filter intents to the parent's event handlers
//! - `viewport`: the mobile/desktop detector used when no explicit flag is passed

pub mod callbacks;
pub mod components;
pub mod viewport;
