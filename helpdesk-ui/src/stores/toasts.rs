//! Transient notification stack
//!
//! The non-blocking side channel for reporting failures (and the occasional
//! success) without interrupting the screen.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

/// Handle for raising toasts from anywhere below [`use_toaster_provider`]
#[derive(Clone, Copy)]
pub struct Toaster {
    state: Store<ToastState>,
}

impl Toaster {
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.state.toasts().write().retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.state.toasts().read().clone()
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = *self.state.next_id().peek();
        self.state.next_id().set(id + 1);
        self.state.toasts().write().push(Toast { id, kind, message });
        id
    }
}

/// Create the toast store and provide a [`Toaster`] to descendants
pub fn use_toaster_provider() -> Toaster {
    let state = use_store(ToastState::default);
    use_context_provider(|| Toaster { state })
}

/// The nearest [`Toaster`], if a provider exists
pub fn try_use_toaster() -> Option<Toaster> {
    try_use_context::<Toaster>()
}
