//! helpdesk-ui - Shared UI types and components for the helpdesk inbox
//!
//! Contains display types, stores, and pure view components. Screens own the
//! state and pass it down as props; nothing in here fetches data.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod viewport;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
pub use viewport::{use_viewport, use_viewport_provider};
