use crate::breakpoint::{resolve, ResponsiveValue};
use crate::class_list::ClassList;

use super::options::{BoxStyle, ContainerTag, MaxWidth, Spacing};

/// Page-level width-constrained wrapper
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerStyle {
    pub max_width: MaxWidth,
    /// Center horizontally with `mx-auto`
    pub centered: bool,
    /// Default responsive side gutters (`px-4 sm:px-6 lg:px-8`)
    pub gutter: bool,
    /// Vertical rhythm between children (`space-y-*`)
    pub spacing: Option<ResponsiveValue<Spacing>>,
    pub decoration: BoxStyle,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            max_width: MaxWidth::default(),
            centered: true,
            gutter: true,
            spacing: None,
            decoration: BoxStyle::default(),
        }
    }
}

impl ContainerStyle {
    pub const TAGS: [ContainerTag; 4] = [
        ContainerTag::Div,
        ContainerTag::Section,
        ContainerTag::Article,
        ContainerTag::Main,
    ];

    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::base("w-full");
        list.push(self.max_width.class())
            .push_if(self.centered, "mx-auto")
            .push_if(self.gutter, "px-4 sm:px-6 lg:px-8")
            .extend(resolve(self.spacing.as_ref(), "space-y"));
        self.decoration.apply(&mut list);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_container() {
        assert_eq!(
            ContainerStyle::default().classes().finish(None),
            "w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8"
        );
    }

    #[test]
    fn test_caller_class_survives() {
        let style = ContainerStyle {
            max_width: MaxWidth::Xl4,
            gutter: false,
            ..Default::default()
        };
        assert_eq!(
            style.classes().finish(Some("max-w-none")),
            "w-full max-w-4xl mx-auto max-w-none"
        );
    }
}
