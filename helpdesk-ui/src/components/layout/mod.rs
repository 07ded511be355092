//! Responsive box primitives
//!
//! Each primitive maps a flat set of optional props onto utility classes via
//! `helpdesk_common::layout`, then renders one element. The caller's `class`
//! always lands last so it can override anything computed here.

mod adaptive_section;
mod container;
mod flex;
mod grid;
mod item;
mod tagged;

pub use adaptive_section::AdaptiveSection;
pub use container::ResponsiveContainer;
pub use flex::ResponsiveFlex;
pub use grid::ResponsiveGrid;
pub use item::LayoutItem;

use dioxus::prelude::*;
use helpdesk_common::{ClassCache, ResponsiveValue, ValueMemo};
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// Resolve a responsive prop to classes, returning the same allocation for
/// as long as the value stays equal across renders
pub fn use_responsive_classes<T>(value: Option<ResponsiveValue<T>>, prefix: &str) -> Rc<[String]>
where
    T: Display + PartialEq + 'static,
{
    let cache = use_hook(|| Rc::new(RefCell::new(ClassCache::<T>::default())));
    let classes = cache.borrow_mut().resolve(value, prefix);
    classes
}

/// Class string computed from a style value, recomputed only when it changes
pub(crate) fn use_style_class<K>(key: K, compute: impl FnOnce(&K) -> String) -> Rc<str>
where
    K: PartialEq + 'static,
{
    let memo = use_hook(|| Rc::new(RefCell::new(ValueMemo::<K, str>::default())));
    let class = memo
        .borrow_mut()
        .get_or_compute(key, |key| Rc::from(compute(key)));
    class
}
