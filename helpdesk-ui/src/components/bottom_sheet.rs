//! Bottom sheet using the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and Escape-to-close
//! for free. The dialog element keeps its native display handling; layout
//! happens in an inner fixed container anchored to the bottom edge.
//!
//! Children are only mounted while the sheet is open, so anything inside
//! (the reply composer, for one) starts fresh on every open.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static SHEET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn BottomSheet(
    /// Controls whether the sheet is open
    is_open: ReadSignal<bool>,
    /// Called when the sheet should close (Escape, backdrop or close button)
    on_close: EventHandler<()>,
    /// Heading shown in the sheet's grab bar
    #[props(default)]
    title: Option<String>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = SHEET_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("sheet-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        // showModal() throws if already open
        let is_dialog_open = element.has_attribute("open");
        let method = match (is_open, is_dialog_open) {
            (true, false) => "showModal",
            (false, true) => "close",
            _ => return,
        };
        if let Ok(func) = js_sys_x::Reflect::get(&element, &method.into()) {
            if let Some(func) = func.dyn_ref::<js_sys_x::Function>() {
                let _ = func.call0(&element);
            }
        }
    });

    let sheet_class = class.unwrap_or_default();
    let heading = title.clone().unwrap_or_default();

    // No display classes on the dialog itself, they would override display:none
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 m-0 max-w-none w-full bg-transparent backdrop:bg-black/60",
            aria_label: title.as_deref(),
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-end",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "w-full max-h-[85vh] overflow-y-auto rounded-t-2xl bg-background shadow-lg {sheet_class}",
                        onclick: move |evt| evt.stop_propagation(),
                        div { class: "sticky top-0 flex items-center justify-between border-b border-border bg-background px-4 py-3",
                            span { class: "text-sm font-semibold", "{heading}" }
                            ChromelessButton {
                                class: Some("rounded-md p-1 text-muted-foreground hover:text-foreground".to_string()),
                                aria_label: Some("Close".to_string()),
                                onclick: move |_| on_close.call(()),
                                XIcon { class: "w-4 h-4" }
                            }
                        }
                        div { class: "p-4", {children} }
                    }
                }
            }
        }
    }
}
