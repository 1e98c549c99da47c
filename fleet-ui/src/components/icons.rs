//! Inline SVG icons.

use dioxus::prelude::*;

#[component]
pub fn ChevronDownIcon() -> Element {
    rsx! {
        svg {
            "viewBox": "0 0 24 24",
            width: "16",
            height: "16",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

#[component]
pub fn CheckCircleIcon() -> Element {
    rsx! {
        svg {
            "viewBox": "0 0 24 24",
            width: "16",
            height: "16",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn FilterIcon() -> Element {
    rsx! {
        svg {
            "viewBox": "0 0 24 24",
            width: "20",
            height: "20",
            fill: "none",
            stroke: "#F97316",
            "stroke-width": "2",
            polygon { points: "22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" }
        }
    }
}

#[component]
pub fn FilterXIcon() -> Element {
    rsx! {
        svg {
            "viewBox": "0 0 24 24",
            width: "20",
            height: "20",
            fill: "none",
            stroke: "#F97316",
            "stroke-width": "2",
            path { d: "M13.013 3H2l8 9.46V19l4 2v-8.54l.9-1.055" }
            path { d: "m22 3-5 5" }
            path { d: "m17 3 5 5" }
        }
    }
}

#[component]
pub fn CalendarIcon() -> Element {
    rsx! {
        svg {
            "viewBox": "0 0 24 24",
            width: "16",
            height: "16",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M16 2v4M8 2v4M3 10h18" }
        }
    }
}
