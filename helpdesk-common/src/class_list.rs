//! Ordered class list builder
//!
//! Computed classes go in first; the caller's `class` is appended last so
//! that on conflicting utilities the caller's class is the last one applied.
//! Nothing the caller passes is ever dropped or deduplicated.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a list from a static base string
    pub fn base(base: &str) -> Self {
        let mut list = Self::new();
        list.push(base);
        list
    }

    /// Append a class (or a space-separated group); empty input is ignored
    pub fn push(&mut self, class: impl AsRef<str>) -> &mut Self {
        self.classes.extend(
            class
                .as_ref()
                .split_whitespace()
                .map(|token| token.to_string()),
        );
        self
    }

    pub fn push_if(&mut self, condition: bool, class: impl AsRef<str>) -> &mut Self {
        if condition {
            self.push(class);
        }
        self
    }

    pub fn extend<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.push(class);
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Append the caller override last and render the final attribute value
    pub fn finish(mut self, caller: Option<&str>) -> String {
        if let Some(caller) = caller {
            self.push(caller);
        }
        self.to_string()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_class_is_appended_last() {
        let list = ClassList::base("flex gap-4");
        assert_eq!(list.finish(Some("gap-2 mt-1")), "flex gap-4 gap-2 mt-1");
    }

    #[test]
    fn test_caller_duplicate_is_kept() {
        let list = ClassList::base("p-4");
        let out = list.finish(Some("p-4"));
        assert_eq!(out.split(' ').filter(|c| *c == "p-4").count(), 2);
    }

    #[test]
    fn test_empty_pushes_are_ignored() {
        let mut list = ClassList::new();
        list.push("").push("  ").push_if(false, "hidden").push("block");
        assert_eq!(list.finish(None), "block");
    }

    #[test]
    fn test_contains() {
        let mut list = ClassList::new();
        list.extend(["grid", "sm:grid-cols-2"]);
        assert!(list.contains("sm:grid-cols-2"));
        assert!(!list.contains("grid-cols-2"));
    }
}
