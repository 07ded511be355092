//! Viewport classification hook
//!
//! The screen that owns layout decisions calls [`use_viewport_provider`]
//! once; anything below reads the class with [`use_viewport`]. Components in
//! `components/` never call either: they take `is_mobile` as a prop.

use crate::wasm_utils::EventListener;
use dioxus::prelude::*;
use helpdesk_common::{ViewportClass, ViewportThresholds};

/// Read the viewport class provided by an ancestor
pub fn use_viewport() -> Signal<ViewportClass> {
    use_context()
}

/// Track the window width and provide its class to descendants.
///
/// Until the first measurement the class is `Desktop`.
pub fn use_viewport_provider(thresholds: ViewportThresholds) -> Signal<ViewportClass> {
    let mut class = use_signal(ViewportClass::default);
    let mut resize_listener: Signal<Option<EventListener>> = use_signal(|| None);
    use_context_provider(|| class);

    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        if let Some(width) = inner_width(&window) {
            class.set(ViewportClass::classify(width, thresholds));
        }

        let measured = window.clone();
        let listener = EventListener::new(window.into(), "resize", move |_| {
            let Some(width) = inner_width(&measured) else {
                return;
            };
            let next = ViewportClass::classify(width, thresholds);
            if *class.peek() != next {
                tracing::debug!("Viewport changed to {:?}", next);
                class.set(next);
            }
        });
        resize_listener.set(Some(listener));
    });

    class
}

fn inner_width(window: &web_sys_x::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|v| v.as_f64())
}
