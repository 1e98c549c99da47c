//! Mobile/desktop detection from the browser viewport.
//!
//! Only consulted when a `FilterBar` is rendered without an explicit `is_mobile`.
//! Off the browser (server rendering, host tests) the viewport is always desktop.

use dioxus::prelude::*;

/// Viewports narrower than this many CSS pixels are mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Whether the current viewport is mobile-sized, updated on window resize.
pub fn use_is_mobile() -> bool {
    let is_mobile = use_signal(current_is_mobile);
    #[cfg(target_arch = "wasm32")]
    use_hook(move || std::rc::Rc::new(resize::ResizeListener::attach(is_mobile)));
    is_mobile()
}

#[cfg(target_arch = "wasm32")]
fn current_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(is_mobile_width)
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn current_is_mobile() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
mod resize {
    use super::current_is_mobile;
    use dioxus::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// A `resize` listener on `window`, removed when dropped with its hook.
    pub(super) struct ResizeListener {
        callback: Option<Closure<dyn FnMut()>>,
    }

    impl ResizeListener {
        pub(super) fn attach(mut is_mobile: Signal<bool>) -> Self {
            let Some(window) = web_sys::window() else {
                return Self { callback: None };
            };
            let callback = Closure::<dyn FnMut()>::new(move || {
                let next = current_is_mobile();
                if *is_mobile.peek() != next {
                    is_mobile.set(next);
                }
            });
            if let Err(err) = window
                .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log::warn!("[Fleet] viewport: failed to watch resize: {:?}", err);
                return Self { callback: None };
            }
            Self {
                callback: Some(callback),
            }
        }
    }

    impl Drop for ResizeListener {
        fn drop(&mut self) {
            if let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) {
                let _ = window
                    .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
            }
        }
    }
}
