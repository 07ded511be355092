//! Value-keyed memo for computed classes
//!
//! Callers rebuild their `ResponsiveValue` mappings and style structs on every
//! render. Keying on value equality hands back the same `Rc` for equal inputs,
//! so anything downstream comparing by pointer sees no change.

use std::fmt::Display;
use std::rc::Rc;

use crate::breakpoint::{resolve, ResponsiveValue};

/// Single-entry cache keyed by value equality
pub struct ValueMemo<K, V: ?Sized> {
    entry: Option<(K, Rc<V>)>,
}

impl<K, V: ?Sized> Default for ValueMemo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V: ?Sized> ValueMemo<K, V> {
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> Rc<V>) -> Rc<V> {
        if let Some((cached, value)) = &self.entry {
            if *cached == key {
                return Rc::clone(value);
            }
        }
        let value = compute(&key);
        self.entry = Some((key, Rc::clone(&value)));
        value
    }
}

/// Memo for [`resolve`], keyed on `(value, prefix)`
pub type ClassCache<T> = ValueMemo<(Option<ResponsiveValue<T>>, String), [String]>;

impl<T: Display + PartialEq> ValueMemo<(Option<ResponsiveValue<T>>, String), [String]> {
    pub fn resolve(&mut self, value: Option<ResponsiveValue<T>>, prefix: &str) -> Rc<[String]> {
        self.get_or_compute((value, prefix.to_string()), |(value, prefix)| {
            resolve(value.as_ref(), prefix).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointMap};

    fn mapping() -> Option<ResponsiveValue<u8>> {
        Some(ResponsiveValue::per_breakpoint(
            BreakpointMap::new()
                .with(Breakpoint::Sm, 2)
                .with(Breakpoint::Lg, 6),
        ))
    }

    #[test]
    fn test_equal_value_returns_same_allocation() {
        let mut cache = ClassCache::default();
        let first = cache.resolve(mapping(), "p");
        let second = cache.resolve(mapping(), "p");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(&*first, &["sm:p-2".to_string(), "lg:p-6".to_string()]);
    }

    #[test]
    fn test_changed_value_or_prefix_recomputes() {
        let mut cache = ClassCache::default();
        let first = cache.resolve(mapping(), "p");
        let other_prefix = cache.resolve(mapping(), "m");
        assert!(!Rc::ptr_eq(&first, &other_prefix));
        let scalar = cache.resolve(Some(ResponsiveValue::single(3)), "m");
        assert_eq!(&*scalar, &["m-3".to_string()]);
    }

    #[test]
    fn test_compute_runs_once_per_distinct_key() {
        let mut memo: ValueMemo<u32, str> = ValueMemo::default();
        let mut calls = 0;
        for key in [1, 1, 1, 2, 2] {
            memo.get_or_compute(key, |k| {
                calls += 1;
                Rc::from(format!("grid-cols-{k}").as_str())
            });
        }
        assert_eq!(calls, 2);
    }
}
