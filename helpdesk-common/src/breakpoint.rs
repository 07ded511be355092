//! Breakpoints and responsive values
//!
//! A responsive value is either one value for every viewport, or a sparse
//! mapping from breakpoint to value. Unset breakpoints emit nothing: there is
//! no inheritance and no fallback default.

use std::fmt::Display;

/// Tailwind viewport breakpoints, in ascending order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in emission order
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Class variant prefix (`sm` in `sm:p-2`)
    pub fn prefix(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Minimum viewport width in pixels at which the breakpoint applies
    pub fn min_width_px(&self) -> u32 {
        match self {
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
        }
    }

    /// Qualify a class with this breakpoint
    pub fn qualify(&self, class: &str) -> String {
        format!("{}:{}", self.prefix(), class)
    }
}

/// Sparse per-breakpoint mapping
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BreakpointMap<T> {
    pub sm: Option<T>,
    pub md: Option<T>,
    pub lg: Option<T>,
    pub xl: Option<T>,
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.set(breakpoint, value);
        self
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        *self.slot_mut(breakpoint) = Some(value);
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    /// Present entries in breakpoint order
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .into_iter()
            .filter_map(move |bp| self.get(bp).map(|v| (bp, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }
}

/// A value that is either fixed or varies per breakpoint.
///
/// Equality is by value, so a mapping rebuilt with the same contents on every
/// render compares equal and does not invalidate memoized props.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResponsiveValue<T> {
    Single(T),
    PerBreakpoint(BreakpointMap<T>),
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Single(value)
    }
}

impl<T> ResponsiveValue<T> {
    pub fn single(value: T) -> Self {
        ResponsiveValue::Single(value)
    }

    pub fn per_breakpoint(map: BreakpointMap<T>) -> Self {
        ResponsiveValue::PerBreakpoint(map)
    }

    /// Map every present value to a class and qualify it with its breakpoint
    pub fn map_classes(&self, class_for: impl Fn(&T) -> String) -> Vec<String> {
        match self {
            ResponsiveValue::Single(value) => vec![class_for(value)],
            ResponsiveValue::PerBreakpoint(map) => map
                .iter()
                .map(|(bp, value)| bp.qualify(&class_for(value)))
                .collect(),
        }
    }
}

impl<T: Display> ResponsiveValue<T> {
    /// `{prefix}-{value}` classes, breakpoint-qualified for mappings
    pub fn classes(&self, prefix: &str) -> Vec<String> {
        self.map_classes(|value| format!("{prefix}-{value}"))
    }
}

/// Resolve an optional responsive value into its class list.
///
/// `None` resolves to an empty list.
pub fn resolve<T: Display>(value: Option<&ResponsiveValue<T>>, prefix: &str) -> Vec<String> {
    value.map(|v| v.classes(prefix)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_emits_single_unqualified_class() {
        let value = ResponsiveValue::single(4);
        assert_eq!(resolve(Some(&value), "p"), vec!["p-4"]);
    }

    #[test]
    fn test_mapping_emits_only_present_breakpoints() {
        let value = ResponsiveValue::per_breakpoint(
            BreakpointMap::new()
                .with(Breakpoint::Lg, "6")
                .with(Breakpoint::Sm, "2"),
        );
        assert_eq!(resolve(Some(&value), "p"), vec!["sm:p-2", "lg:p-6"]);
    }

    #[test]
    fn test_mapping_emits_in_breakpoint_order() {
        let value = ResponsiveValue::per_breakpoint(
            BreakpointMap::new()
                .with(Breakpoint::Xl, 4)
                .with(Breakpoint::Md, 2)
                .with(Breakpoint::Sm, 1),
        );
        assert_eq!(
            value.classes("grid-cols"),
            vec!["sm:grid-cols-1", "md:grid-cols-2", "xl:grid-cols-4"]
        );
    }

    #[test]
    fn test_absent_value_resolves_to_nothing() {
        assert!(resolve::<u8>(None, "gap").is_empty());
    }

    #[test]
    fn test_empty_mapping_resolves_to_nothing() {
        let value: ResponsiveValue<u8> = ResponsiveValue::per_breakpoint(BreakpointMap::new());
        assert!(value.classes("gap").is_empty());
    }

    #[test]
    fn test_rebuilt_mapping_compares_equal() {
        let build = || {
            ResponsiveValue::per_breakpoint(
                BreakpointMap::new()
                    .with(Breakpoint::Sm, 2)
                    .with(Breakpoint::Lg, 3),
            )
        };
        assert_eq!(build(), build());
        assert_ne!(build(), ResponsiveValue::single(2));
    }

    #[test]
    fn test_map_classes_qualifies_custom_classes() {
        let value = ResponsiveValue::per_breakpoint(
            BreakpointMap::new()
                .with(Breakpoint::Sm, false)
                .with(Breakpoint::Md, true),
        );
        let classes = value.map_classes(|visible| {
            if *visible { "block" } else { "hidden" }.to_string()
        });
        assert_eq!(classes, vec!["sm:hidden", "md:block"]);
    }
}
