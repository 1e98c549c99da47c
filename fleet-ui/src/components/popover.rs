//! Trigger button with a floating panel, used for every dropdown and the calendar.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PopoverProps {
    /// Content of the trigger button
    pub trigger: Element,
    /// CSS width of the trigger; the panel matches it
    #[props(default = "100%".to_string())]
    pub width: String,
    /// Close when anything inside the panel is clicked (menus). Calendars keep it open.
    #[props(default = true)]
    pub close_on_select: bool,
    pub children: Element,
}

/// A button that toggles a panel below it. Clicking outside the panel closes it.
#[component]
pub fn Popover(props: PopoverProps) -> Element {
    let mut open = use_signal(|| false);
    let close_on_select = props.close_on_select;
    let is_open = open();

    rsx! {
        div {
            style: "position: relative; width: {props.width};",
            button {
                r#type: "button",
                "aria-haspopup": "true",
                "aria-expanded": "{is_open}",
                style: "width: 100%; display: flex; align-items: center; justify-content: space-between; gap: 8px; padding: 4px 8px; font-size: 12px; color: white; background: #526189; border: 1px solid white; border-radius: 6px; cursor: pointer;",
                onclick: move |_| open.set(!is_open),
                {props.trigger}
            }
            if is_open {
                div {
                    style: "position: fixed; inset: 0; z-index: 40;",
                    onclick: move |_| open.set(false),
                }
                div {
                    role: "menu",
                    style: "position: absolute; top: calc(100% + 4px); left: 0; min-width: 100%; z-index: 50; padding: 4px; color: white; background: #526189; border-radius: 6px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);",
                    onclick: move |_| {
                        if close_on_select {
                            open.set(false);
                        }
                    },
                    {props.children}
                }
            }
        }
    }
}
