//! Store types for UI state management
//!
//! Screens own these stores and pass lenses or values down as props. Each
//! store derives `Store` for fine-grained reactivity via lensing.

pub mod dashboard;
pub mod toasts;

pub use dashboard::*;
pub use toasts::*;
