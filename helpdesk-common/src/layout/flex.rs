use crate::breakpoint::{resolve, ResponsiveValue};
use crate::class_list::ClassList;

use super::options::{Align, BoxStyle, ContainerTag, FlexDirection, Justify, Spacing, Wrap};

/// Flexbox row/column
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlexStyle {
    pub direction: Option<ResponsiveValue<FlexDirection>>,
    pub align: Option<ResponsiveValue<Align>>,
    pub justify: Option<ResponsiveValue<Justify>>,
    pub wrap: Option<ResponsiveValue<Wrap>>,
    pub gap: Option<ResponsiveValue<Spacing>>,
    pub inline: bool,
    pub decoration: BoxStyle,
}

impl FlexStyle {
    pub const TAGS: [ContainerTag; 6] = [
        ContainerTag::Div,
        ContainerTag::Section,
        ContainerTag::Nav,
        ContainerTag::Header,
        ContainerTag::Footer,
        ContainerTag::Aside,
    ];

    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::base(if self.inline { "inline-flex" } else { "flex" });
        list.extend(resolve(self.direction.as_ref(), "flex"))
            .extend(resolve(self.align.as_ref(), "items"))
            .extend(resolve(self.justify.as_ref(), "justify"))
            .extend(resolve(self.wrap.as_ref(), "flex"))
            .extend(resolve(self.gap.as_ref(), "gap"));
        self.decoration.apply(&mut list);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointMap};

    #[test]
    fn test_stack_then_row() {
        let style = FlexStyle {
            direction: Some(ResponsiveValue::per_breakpoint(
                BreakpointMap::new()
                    .with(Breakpoint::Sm, FlexDirection::Col)
                    .with(Breakpoint::Md, FlexDirection::Row),
            )),
            align: Some(Align::Center.into()),
            gap: Some(Spacing::S4.into()),
            ..Default::default()
        };
        assert_eq!(
            style.classes().finish(None),
            "flex sm:flex-col md:flex-row items-center gap-4"
        );
    }

    #[test]
    fn test_inline_wrap_justify() {
        let style = FlexStyle {
            inline: true,
            wrap: Some(Wrap::Wrap.into()),
            justify: Some(Justify::Between.into()),
            ..Default::default()
        };
        assert_eq!(
            style.classes().finish(Some("gap-1")),
            "inline-flex justify-between flex-wrap gap-1"
        );
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
            assert_eq!(tag.restrict(&FlexStyle::TAGS, ContainerTag::Div), tag);
        }
        for tag in [ContainerTag::Article, ContainerTag::Main] {
            assert_eq!(
                tag.restrict(&FlexStyle::TAGS, ContainerTag::Div),
                ContainerTag::Div
            );
        }
    }
}
