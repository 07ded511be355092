//! Toast stack rendered from the [`Toaster`](crate::stores::toasts::Toaster) store

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::stores::toasts::{ToastKind, Toaster};
use dioxus::prelude::*;

/// Toasts dismiss themselves after this long
const TOAST_TIMEOUT_MS: u64 = 5000;

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_context::<Toaster>();
    let toasts = toaster.toasts();

    rsx! {
        div {
            class: "pointer-events-none fixed bottom-4 right-4 z-50 flex max-w-md flex-col gap-2",
            aria_live: "polite",
            for toast in toasts {
                ToastView {
                    key: "{toast.id}",
                    id: toast.id,
                    kind: toast.kind,
                    message: toast.message.clone(),
                    on_dismiss: move |id| toaster.dismiss(id),
                }
            }
        }
    }
}

#[component]
fn ToastView(id: u64, kind: ToastKind, message: String, on_dismiss: EventHandler<u64>) -> Element {
    use_hook(move || {
        spawn(async move {
            sleep_ms(TOAST_TIMEOUT_MS).await;
            on_dismiss.call(id);
        })
    });

    let (color, role) = match kind {
        ToastKind::Success => ("bg-green-600", "status"),
        ToastKind::Error => ("bg-red-600", "alert"),
    };

    rsx! {
        div {
            class: "pointer-events-auto rounded-lg px-4 py-3 text-white shadow-lg {color}",
            role,
            div { class: "flex items-center justify-between gap-4",
                span { class: "flex-1 text-sm", "{message}" }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(id),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
