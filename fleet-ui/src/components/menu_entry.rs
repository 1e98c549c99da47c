//! A single row in a selector menu.

use crate::callbacks::FilterCallbacks;
use crate::components::icons::CheckCircleIcon;
use dioxus::prelude::*;
use fleet_filters::view::MenuItem;

/// Menu row with a tooltip and an optional check mark.
///
/// A check mark with its own intent is a separate hit region: its click stops
/// propagating so the row's handler does not also run.
#[component]
pub fn MenuEntry(item: MenuItem, sink: FilterCallbacks, compact: bool) -> Element {
    let padding = if compact { "7.2px 8px" } else { "4px 8px" };
    let removable = item.on_check.is_some();
    let on_row = item.clone();
    let on_check = item.clone();

    rsx! {
        div {
            role: "menuitem",
            title: "{item.tooltip}",
            style: "display: flex; align-items: center; justify-content: space-between; padding: {padding}; font-size: 12px; border-radius: 4px; cursor: pointer; overflow: hidden;",
            onclick: move |_| on_row.click(&sink),
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{item.label}"
            }
            if item.checked {
                if removable {
                    span {
                        role: "button",
                        "aria-label": "Remove {item.label}",
                        style: "display: inline-flex; flex-shrink: 0; margin-left: 8px;",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_check.click_check(&sink);
                        },
                        CheckCircleIcon {}
                    }
                } else {
                    span {
                        style: "display: inline-flex; flex-shrink: 0; margin-left: 8px;",
                        CheckCircleIcon {}
                    }
                }
            }
        }
    }
}
