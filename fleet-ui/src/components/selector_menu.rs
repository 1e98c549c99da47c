//! Dropdown selector for facilities, mission types or metrics.

use crate::callbacks::FilterCallbacks;
use crate::components::icons::ChevronDownIcon;
use crate::components::menu_entry::MenuEntry;
use crate::components::popover::Popover;
use dioxus::prelude::*;
use fleet_filters::view::SelectorView;

#[derive(Props, Clone, PartialEq)]
pub struct SelectorMenuProps {
    pub view: SelectorView,
    pub sink: FilterCallbacks,
    /// CSS width of the trigger
    pub width: String,
    /// Taller rows for touch layouts
    #[props(default = false)]
    pub compact: bool,
}

/// Trigger showing the current selection (plus a count badge for multi-selects)
/// over a menu of entries.
#[component]
pub fn SelectorMenu(props: SelectorMenuProps) -> Element {
    let view = props.view;
    let sink = props.sink;
    let compact = props.compact;

    rsx! {
        Popover {
            width: props.width,
            trigger: rsx! {
                span {
                    style: "flex: 1; text-align: left; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{view.trigger}"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    if let Some(count) = view.badge {
                        span {
                            title: "{count} selected",
                            style: "display: inline-flex; align-items: center; justify-content: center; width: 20px; height: 20px; font-size: 12px; font-weight: 500; background: rgba(255, 255, 255, 0.2); border-radius: 9999px;",
                            "{count}"
                        }
                    }
                    ChevronDownIcon {}
                }
            },
            for item in view.items.iter() {
                MenuEntry {
                    key: "{item.key}",
                    item: item.clone(),
                    sink,
                    compact,
                }
            }
        }
    }
}
