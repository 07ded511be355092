use crate::breakpoint::{resolve, Breakpoint, ResponsiveValue};
use crate::class_list::ClassList;

use super::options::{BoxStyle, ContainerTag, Spacing};

/// Titled content section whose header stacks on small screens
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionStyle {
    /// Space between header and body
    pub spacing: Option<ResponsiveValue<Spacing>>,
    /// Header switches from stacked to a single row at this breakpoint
    pub header_row_from: Breakpoint,
    pub decoration: BoxStyle,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            spacing: Some(Spacing::S4.into()),
            header_row_from: Breakpoint::Sm,
            decoration: BoxStyle::default(),
        }
    }
}

impl SectionStyle {
    pub const TAGS: [ContainerTag; 4] = [
        ContainerTag::Section,
        ContainerTag::Article,
        ContainerTag::Aside,
        ContainerTag::Div,
    ];

    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::base("flex flex-col");
        list.extend(resolve(self.spacing.as_ref(), "gap"));
        self.decoration.apply(&mut list);
        list
    }

    pub fn header_classes(&self) -> ClassList {
        let bp = self.header_row_from;
        let mut list = ClassList::base("flex flex-col gap-2");
        list.push(bp.qualify("flex-row"))
            .push(bp.qualify("items-center"))
            .push(bp.qualify("justify-between"));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section() {
        let style = SectionStyle::default();
        assert_eq!(style.classes().finish(None), "flex flex-col gap-4");
        assert_eq!(
            style.header_classes().finish(None),
            "flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between"
        );
    }

    #[test]
    fn test_card_section() {
        let style = SectionStyle {
            spacing: None,
            header_row_from: Breakpoint::Lg,
            decoration: BoxStyle {
                border: true,
                rounded: true,
                ..Default::default()
            },
        };
        assert_eq!(style.classes().finish(Some("p-6")), "flex flex-col border rounded-lg p-6");
        assert!(style.header_classes().contains("lg:flex-row"));
    }
}
