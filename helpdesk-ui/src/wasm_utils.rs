//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep that closure
//! alive while attached. Instead of `closure.forget()`, which leaks and never
//! detaches, the closure is stored in a struct whose `Drop` removes the
//! listener:
//!
//! ```ignore
//! // Listener is attached when EventListener is created
//! let listener = EventListener::new(window.into(), "resize", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus, keep it in a `Signal<Option<EventListener>>`; the listener
//! goes away with the component's scope.

use wasm_bindgen_x::prelude::*;

/// An event listener on a window, document or element that removes itself
/// when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
