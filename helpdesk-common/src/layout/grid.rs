use crate::breakpoint::{resolve, ResponsiveValue};
use crate::class_list::ClassList;

use super::options::{Align, BoxStyle, ContainerTag, Spacing};

/// Minimum track width used by auto-fit when the caller gives none
pub const DEFAULT_MIN_COL_WIDTH: &str = "250px";

/// CSS grid with either explicit responsive columns or auto-fit tracks
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridStyle {
    pub cols: Option<ResponsiveValue<u8>>,
    pub rows: Option<ResponsiveValue<u8>>,
    pub gap: Option<ResponsiveValue<Spacing>>,
    pub align: Option<ResponsiveValue<Align>>,
    /// Derive the column count from available width. Takes precedence over `cols`.
    pub auto_fit: bool,
    /// Any CSS length; defaults to [`DEFAULT_MIN_COL_WIDTH`]
    pub min_col_width: Option<String>,
    pub decoration: BoxStyle,
}

/// Class list plus the inline style auto-fit needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridOutput {
    pub classes: ClassList,
    pub style: Option<String>,
}

impl GridStyle {
    pub const TAGS: [ContainerTag; 6] = [
        ContainerTag::Div,
        ContainerTag::Section,
        ContainerTag::Nav,
        ContainerTag::Header,
        ContainerTag::Footer,
        ContainerTag::Aside,
    ];

    pub fn output(&self) -> GridOutput {
        let mut classes = ClassList::base("grid");
        let style = if self.auto_fit {
            let min = self
                .min_col_width
                .as_deref()
                .unwrap_or(DEFAULT_MIN_COL_WIDTH);
            Some(format!(
                "grid-template-columns: repeat(auto-fit, minmax({min}, 1fr));"
            ))
        } else {
            classes.extend(resolve(self.cols.as_ref(), "grid-cols"));
            None
        };
        classes
            .extend(resolve(self.rows.as_ref(), "grid-rows"))
            .extend(resolve(self.gap.as_ref(), "gap"))
            .extend(resolve(self.align.as_ref(), "items"));
        self.decoration.apply(&mut classes);
        GridOutput { classes, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointMap};

    fn responsive_cols() -> ResponsiveValue<u8> {
        ResponsiveValue::per_breakpoint(
            BreakpointMap::new()
                .with(Breakpoint::Sm, 1)
                .with(Breakpoint::Md, 2)
                .with(Breakpoint::Xl, 4),
        )
    }

    #[test]
    fn test_explicit_columns() {
        let style = GridStyle {
            cols: Some(responsive_cols()),
            gap: Some(Spacing::S6.into()),
            ..Default::default()
        };
        let out = style.output();
        assert_eq!(
            out.classes.to_string(),
            "grid sm:grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6"
        );
        assert_eq!(out.style, None);
    }

    #[test]
    fn test_auto_fit_ignores_cols() {
        let style = GridStyle {
            cols: Some(responsive_cols()),
            auto_fit: true,
            ..Default::default()
        };
        let out = style.output();
        assert!(out.classes.iter().all(|c| !c.contains("grid-cols")));
        assert_eq!(
            out.style.as_deref(),
            Some("grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));")
        );
    }

    #[test]
    fn test_auto_fit_custom_min_width() {
        let style = GridStyle {
            cols: Some(3.into()),
            auto_fit: true,
            min_col_width: Some("18rem".to_string()),
            ..Default::default()
        };
        let out = style.output();
        let style = out.style.unwrap();
        assert_eq!(style.matches("repeat(auto-fit").count(), 1);
        assert!(style.contains("minmax(18rem, 1fr)"));
        assert!(!out.classes.contains("grid-cols-3"));
    }

    #[test]
    fn test_tag_list() {
        for tag in [
            ContainerTag::Div,
            ContainerTag::Section,
            ContainerTag::Nav,
            ContainerTag::Header,
            ContainerTag::Footer,
            ContainerTag::Aside,
        ] {
            assert_eq!(tag.restrict(&GridStyle::TAGS, ContainerTag::Div), tag);
        }
        for tag in [ContainerTag::Article, ContainerTag::Main] {
            assert_eq!(
                tag.restrict(&GridStyle::TAGS, ContainerTag::Div),
                ContainerTag::Div
            );
        }
    }
}
