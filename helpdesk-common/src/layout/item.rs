use crate::breakpoint::{resolve, Breakpoint, ResponsiveValue};
use crate::class_list::ClassList;

use super::options::{BoxStyle, ContainerTag};

/// A child of a flex or grid primitive
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemStyle {
    pub col_span: Option<ResponsiveValue<u8>>,
    pub row_span: Option<ResponsiveValue<u8>>,
    pub order: Option<ResponsiveValue<u8>>,
    /// `flex-1`
    pub grow: bool,
    /// `shrink-0`
    pub no_shrink: bool,
    /// Hidden below this breakpoint, shown from it upwards
    pub show_from: Option<Breakpoint>,
    pub decoration: BoxStyle,
}

impl ItemStyle {
    pub const TAGS: [ContainerTag; 6] = [
        ContainerTag::Div,
        ContainerTag::Section,
        ContainerTag::Nav,
        ContainerTag::Header,
        ContainerTag::Footer,
        ContainerTag::Aside,
    ];

    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::new();
        list.extend(resolve(self.col_span.as_ref(), "col-span"))
            .extend(resolve(self.row_span.as_ref(), "row-span"))
            .extend(resolve(self.order.as_ref(), "order"))
            .push_if(self.grow, "flex-1 min-w-0")
            .push_if(self.no_shrink, "shrink-0");
        if let Some(bp) = self.show_from {
            list.push("hidden").push(bp.qualify("block"));
        }
        self.decoration.apply(&mut list);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::BreakpointMap;

    #[test]
    fn test_spans_and_visibility() {
        let style = ItemStyle {
            col_span: Some(ResponsiveValue::per_breakpoint(
                BreakpointMap::new().with(Breakpoint::Lg, 2),
            )),
            show_from: Some(Breakpoint::Md),
            ..Default::default()
        };
        assert_eq!(style.classes().finish(None), "lg:col-span-2 hidden md:block");
    }

    #[test]
    fn test_grow_item() {
        let style = ItemStyle {
            grow: true,
            no_shrink: false,
            ..Default::default()
        };
        assert_eq!(style.classes().finish(Some("p-2")), "flex-1 min-w-0 p-2");
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
            assert_eq!(tag.restrict(&ItemStyle::TAGS, ContainerTag::Div), tag);
        }
        for tag in [ContainerTag::Article, ContainerTag::Main] {
            assert_eq!(
                tag.restrict(&ItemStyle::TAGS, ContainerTag::Div),
                ContainerTag::Div
            );
        }
    }
}
