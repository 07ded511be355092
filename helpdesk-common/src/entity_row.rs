//! Display rules for a selectable list row

use crate::class_list::ClassList;

/// Badges shown before collapsing the rest into a `+N` counter
pub const MAX_VISIBLE_BADGES: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
    Success,
    Warning,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-primary text-primary-foreground",
            BadgeVariant::Secondary => "bg-secondary text-secondary-foreground",
            BadgeVariant::Outline => "border border-border text-foreground",
            BadgeVariant::Destructive => "bg-destructive text-destructive-foreground",
            BadgeVariant::Success => "bg-emerald-500/15 text-emerald-700",
            BadgeVariant::Warning => "bg-amber-500/15 text-amber-700",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

/// One `label: value` pair of the meta strip
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetaItem {
    pub label: String,
    pub value: String,
}

impl MetaItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Badges split into the visible ones and an overflow count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStrip<'a> {
    pub visible: &'a [Badge],
    pub overflow: usize,
}

impl BadgeStrip<'_> {
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }

    /// The `+N` counter, drawn as a badge of its own
    pub fn overflow_badge(&self) -> Option<Badge> {
        self.overflow_label()
            .map(|label| Badge::new(label, BadgeVariant::Outline))
    }
}

pub fn badge_strip(badges: &[Badge]) -> BadgeStrip<'_> {
    let shown = badges.len().min(MAX_VISIBLE_BADGES);
    BadgeStrip {
        visible: &badges[..shown],
        overflow: badges.len() - shown,
    }
}

/// Explicit label if given, else `"{subject}: {preview}"`, else `subject`
pub fn accessible_label(subject: &str, preview: Option<&str>, explicit: Option<&str>) -> String {
    if let Some(label) = explicit {
        return label.to_string();
    }
    match preview.filter(|p| !p.is_empty()) {
        Some(preview) => format!("{subject}: {preview}"),
        None => subject.to_string(),
    }
}

/// A divider separates the preview from the meta strip when both are shown
pub fn shows_meta_divider(preview: Option<&str>, meta: &[MetaItem]) -> bool {
    preview.is_some_and(|p| !p.is_empty()) && !meta.is_empty()
}

/// Keys that activate a focused row, matched against `KeyboardEvent.key`
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Element a row renders as. Always interactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowElement {
    Anchor,
    Button,
}

impl RowElement {
    pub fn for_href(href: Option<&str>) -> Self {
        match href {
            Some(_) => RowElement::Anchor,
            None => RowElement::Button,
        }
    }

    /// `aria-current` for a selected row. Only anchors carry it; rows are
    /// not toggles, so `aria-pressed` is never set.
    pub fn aria_current(self, selected: bool) -> Option<&'static str> {
        match self {
            RowElement::Anchor if selected => Some("true"),
            _ => None,
        }
    }
}

/// What a row does with a keydown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyActivation {
    /// Not an activation key
    Ignore,
    /// The browser will synthesize a click on its own
    Native,
    /// Suppress the default and activate the row directly
    Handle,
}

/// Decide how a key activates a row so each press activates exactly once.
/// Anchors follow Enter natively but not Space; buttons get both handled
/// here with the native click suppressed.
pub fn key_activation(element: RowElement, key: &str) -> KeyActivation {
    if !is_activation_key(key) {
        return KeyActivation::Ignore;
    }
    match (element, key) {
        (RowElement::Anchor, "Enter") => KeyActivation::Native,
        _ => KeyActivation::Handle,
    }
}

pub fn row_class(selected: bool, caller: Option<&str>) -> String {
    let mut list = ClassList::base(
        "group flex w-full items-start gap-3 rounded-lg border border-transparent px-3 py-2.5 text-left transition-colors hover:bg-accent/50 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring",
    );
    list.push_if(selected, "ring-2 ring-primary bg-accent shadow-sm");
    list.finish(caller)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badges(n: usize) -> Vec<Badge> {
        (0..n)
            .map(|i| Badge::new(format!("tag-{i}"), BadgeVariant::Secondary))
            .collect()
    }

    #[test]
    fn test_three_badges_overflow_by_one() {
        let all = badges(3);
        let strip = badge_strip(&all);
        let labels: Vec<_> = strip.visible.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["tag-0", "tag-1"]);
        assert_eq!(strip.overflow_label().as_deref(), Some("+1"));
        assert_eq!(
            strip.overflow_badge(),
            Some(Badge::new("+1", BadgeVariant::Outline))
        );
    }

    #[test]
    fn test_two_badges_no_overflow() {
        let all = badges(2);
        let strip = badge_strip(&all);
        assert_eq!(strip.visible.len(), 2);
        assert_eq!(strip.overflow_label(), None);
        assert_eq!(strip.overflow_badge(), None);
    }

    #[test]
    fn test_meta_divider_follows_preview() {
        let meta = vec![MetaItem::new("From", "Ada")];
        assert!(shows_meta_divider(Some("Order #42 arrived broken"), &meta));
        assert!(!shows_meta_divider(None, &meta));
        assert!(!shows_meta_divider(Some(""), &meta));
        assert!(!shows_meta_divider(Some("Order #42"), &[]));
    }

    #[test]
    fn test_no_badges() {
        let strip = badge_strip(&[]);
        assert!(strip.visible.is_empty());
        assert_eq!(strip.overflow, 0);
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        for key in ["Escape", "Tab", "a", "ArrowDown", "Spacebar", ""] {
            assert!(!is_activation_key(key), "{key:?} should not activate");
        }
    }

    #[test]
    fn test_each_key_activates_once() {
        assert_eq!(key_activation(RowElement::Anchor, "Enter"), KeyActivation::Native);
        assert_eq!(key_activation(RowElement::Anchor, " "), KeyActivation::Handle);
        assert_eq!(key_activation(RowElement::Button, "Enter"), KeyActivation::Handle);
        assert_eq!(key_activation(RowElement::Button, " "), KeyActivation::Handle);
        assert_eq!(key_activation(RowElement::Button, "Escape"), KeyActivation::Ignore);
    }

    #[test]
    fn test_accessible_label() {
        assert_eq!(
            accessible_label("Refund request", Some("Order #42 arrived broken"), None),
            "Refund request: Order #42 arrived broken"
        );
        assert_eq!(accessible_label("Refund request", None, None), "Refund request");
        assert_eq!(accessible_label("Refund request", Some(""), None), "Refund request");
        assert_eq!(
            accessible_label("Refund request", Some("x"), Some("Open conversation")),
            "Open conversation"
        );
    }

    #[test]
    fn test_row_element() {
        assert_eq!(RowElement::for_href(Some("/c/1")), RowElement::Anchor);
        assert_eq!(RowElement::for_href(None), RowElement::Button);
    }

    #[test]
    fn test_selected_row_class() {
        assert!(row_class(true, None).contains("ring-primary"));
        assert!(!row_class(false, None).contains("ring-primary"));
        assert!(row_class(false, Some("h-20")).ends_with("h-20"));
    }

    #[test]
    fn test_selection_is_announced_on_anchors_only() {
        assert_eq!(RowElement::Anchor.aria_current(true), Some("true"));
        assert_eq!(RowElement::Anchor.aria_current(false), None);
        assert_eq!(RowElement::Button.aria_current(true), None);
    }
}
