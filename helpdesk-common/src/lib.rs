//! helpdesk-common - Pure design-system logic for the helpdesk inbox
//!
//! Everything in here is a plain function of its inputs: no DOM, no signals,
//! no I/O. `helpdesk-ui` turns these decisions into Dioxus elements.

pub mod breakpoint;
pub mod class_list;
pub mod composer;
pub mod entity_row;
pub mod inbox_filter;
pub mod layout;
pub mod memo;
pub mod shell;
pub mod tabs;
pub mod viewport;
pub mod virtual_list;

pub use breakpoint::{resolve, Breakpoint, BreakpointMap, ResponsiveValue};
pub use class_list::ClassList;
pub use composer::{
    run_guarded, BusyGuard, ComposerAction, ComposerDrafts, ComposerState, ComposerTask,
};
pub use entity_row::{
    accessible_label, badge_strip, is_activation_key, key_activation, row_class,
    shows_meta_divider, Badge, BadgeStrip, BadgeVariant, KeyActivation, MetaItem, RowElement,
    MAX_VISIBLE_BADGES,
};
pub use inbox_filter::{FilterCounts, FilterIcon, InboxFilter};
pub use layout::*;
pub use memo::{ClassCache, ValueMemo};
pub use shell::{arrange, Pane, PanePresence, ShellLabels, ShellLayout};
pub use tabs::{
    adjacent_tab_value, duplicate_tab_value, SelectionMode, TabOrientation, TabSelection,
    TabSize, TabStyle, TabVariant, VariantClasses,
};
pub use viewport::{ViewportClass, ViewportThresholds};
pub use virtual_list::VirtualWindow;
