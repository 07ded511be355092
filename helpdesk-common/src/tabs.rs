//! Tab group styling tables and selection state

use crate::breakpoint::Breakpoint;
use crate::class_list::ClassList;

/// Visual style of a tab group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabVariant {
    #[default]
    Default,
    Pills,
    Underline,
    Borderless,
    Compact,
}

/// Classes a variant contributes to the list and to each trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantClasses {
    pub list: &'static str,
    pub trigger: &'static str,
}

impl TabVariant {
    pub fn classes(&self) -> VariantClasses {
        match self {
            TabVariant::Default => VariantClasses {
                list: "bg-muted text-muted-foreground rounded-lg p-1",
                trigger: "rounded-md data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow-sm",
            },
            TabVariant::Pills => VariantClasses {
                list: "gap-2 bg-transparent",
                trigger: "rounded-full border border-transparent data-[state=active]:bg-primary data-[state=active]:text-primary-foreground",
            },
            TabVariant::Underline => VariantClasses {
                list: "border-b border-border bg-transparent",
                trigger: "rounded-none border-b-2 border-transparent -mb-px data-[state=active]:border-primary data-[state=active]:text-foreground",
            },
            TabVariant::Borderless => VariantClasses {
                list: "bg-transparent",
                trigger: "bg-transparent data-[state=active]:text-foreground data-[state=active]:font-semibold",
            },
            TabVariant::Compact => VariantClasses {
                list: "bg-muted rounded-md p-0.5 gap-0.5",
                trigger: "rounded-sm px-2 py-1 text-xs data-[state=active]:bg-background",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl TabSize {
    pub fn trigger_class(&self) -> &'static str {
        match self {
            TabSize::Sm => "h-8 px-2.5 text-xs",
            TabSize::Md => "h-9 px-3 text-sm",
            TabSize::Lg => "h-11 px-4 text-base",
        }
    }
}

/// Direction of the trigger strip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabOrientation {
    #[default]
    Horizontal,
    Vertical,
    /// Stacked below the breakpoint, a row at and above it.
    /// Both classes are always emitted; the media query decides.
    Responsive(Breakpoint),
}

impl TabOrientation {
    pub fn list_classes(&self) -> Vec<String> {
        match self {
            TabOrientation::Horizontal => vec!["flex-row".to_string()],
            TabOrientation::Vertical => vec!["flex-col".to_string()],
            TabOrientation::Responsive(bp) => {
                vec!["flex-col".to_string(), bp.qualify("flex-row")]
            }
        }
    }

    /// `aria-orientation` value; responsive groups announce as horizontal
    pub fn aria(&self) -> &'static str {
        match self {
            TabOrientation::Vertical => "vertical",
            _ => "horizontal",
        }
    }
}

/// Everything that styles a tab group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TabStyle {
    pub variant: TabVariant,
    pub size: TabSize,
    pub orientation: TabOrientation,
    /// Triggers share the available width equally
    pub full_width: bool,
}

impl TabStyle {
    pub fn list_class(&self, caller: Option<&str>) -> String {
        let mut list = ClassList::base("inline-flex items-center");
        list.extend(self.orientation.list_classes())
            .push(self.variant.classes().list)
            .push_if(self.full_width, "w-full");
        list.finish(caller)
    }

    pub fn trigger_class(&self, caller: Option<&str>) -> String {
        let mut list = ClassList::base(
            "inline-flex items-center justify-center gap-2 whitespace-nowrap font-medium transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50",
        );
        list.push(self.size.trigger_class())
            .push(self.variant.classes().trigger)
            .push_if(self.full_width, "flex-1");
        list.finish(caller)
    }
}

/// Who owns the active tab
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// The caller pushes the active value in and updates it from `on_change`
    Controlled(Option<String>),
    /// The group tracks its own selection starting from `default`
    Uncontrolled { default: Option<String> },
}

/// Internal selection state of one tab group
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSelection {
    own: Option<String>,
}

impl TabSelection {
    pub fn new(mode: &SelectionMode) -> Self {
        match mode {
            SelectionMode::Controlled(_) => Self { own: None },
            SelectionMode::Uncontrolled { default } => Self {
                own: default.clone(),
            },
        }
    }

    pub fn active<'a>(&'a self, mode: &'a SelectionMode) -> Option<&'a str> {
        match mode {
            SelectionMode::Controlled(value) => value.as_deref(),
            SelectionMode::Uncontrolled { .. } => self.own.as_deref(),
        }
    }

    /// Record a user selection. A controlled group never changes itself;
    /// the caller is notified and decides.
    pub fn select(&mut self, mode: &SelectionMode, value: &str) {
        if let SelectionMode::Uncontrolled { .. } = mode {
            self.own = Some(value.to_string());
        }
    }
}

/// First value that appears more than once in a group
pub fn duplicate_tab_value<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = std::collections::HashSet::new();
    values.into_iter().find(|value| !seen.insert(*value))
}

/// Value an arrow key moves to from `current`, wrapping at either end.
/// With nothing active the first value is taken.
pub fn adjacent_tab_value<'a>(
    values: &[&'a str],
    current: Option<&str>,
    forward: bool,
) -> Option<&'a str> {
    if values.is_empty() {
        return None;
    }
    let Some(index) = current.and_then(|c| values.iter().position(|v| *v == c)) else {
        return values.first().copied();
    };
    let next = if forward {
        (index + 1) % values.len()
    } else {
        (index + values.len() - 1) % values.len()
    };
    values.get(next).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_navigation_wraps() {
        let values = ["inbox", "archive", "spam"];
        assert_eq!(adjacent_tab_value(&values, Some("inbox"), true), Some("archive"));
        assert_eq!(adjacent_tab_value(&values, Some("spam"), true), Some("inbox"));
        assert_eq!(adjacent_tab_value(&values, Some("inbox"), false), Some("spam"));
        assert_eq!(adjacent_tab_value(&values, None, true), Some("inbox"));
        assert_eq!(adjacent_tab_value(&[], Some("inbox"), true), None);
    }

    #[test]
    fn test_controlled_selection_does_not_self_override() {
        let mode = SelectionMode::Controlled(Some("inbox".to_string()));
        let mut selection = TabSelection::new(&mode);
        selection.select(&mode, "archive");
        assert_eq!(selection.active(&mode), Some("inbox"));

        let updated = SelectionMode::Controlled(Some("archive".to_string()));
        assert_eq!(selection.active(&updated), Some("archive"));
    }

    #[test]
    fn test_uncontrolled_selection_updates_immediately() {
        let mode = SelectionMode::Uncontrolled {
            default: Some("inbox".to_string()),
        };
        let mut selection = TabSelection::new(&mode);
        assert_eq!(selection.active(&mode), Some("inbox"));
        selection.select(&mode, "archive");
        assert_eq!(selection.active(&mode), Some("archive"));
    }

    #[test]
    fn test_uncontrolled_without_default_has_no_selection() {
        let mode = SelectionMode::Uncontrolled { default: None };
        let selection = TabSelection::new(&mode);
        assert_eq!(selection.active(&mode), None);
    }

    #[test]
    fn test_responsive_orientation_emits_both_classes() {
        let classes = TabOrientation::Responsive(Breakpoint::Md).list_classes();
        assert_eq!(classes, vec!["flex-col", "md:flex-row"]);
    }

    #[test]
    fn test_variant_table_is_distinct() {
        let variants = [
            TabVariant::Default,
            TabVariant::Pills,
            TabVariant::Underline,
            TabVariant::Borderless,
            TabVariant::Compact,
        ];
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a.classes(), b.classes());
            }
        }
    }

    #[test]
    fn test_full_width_triggers_flex() {
        let style = TabStyle {
            full_width: true,
            ..Default::default()
        };
        assert!(style.list_class(None).ends_with("w-full"));
        assert!(style.trigger_class(Some("uppercase")).ends_with("flex-1 uppercase"));
    }

    #[test]
    fn test_duplicate_tab_value() {
        assert_eq!(duplicate_tab_value(["a", "b", "a"]), Some("a"));
        assert_eq!(duplicate_tab_value(["a", "b"]), None);
    }
}
