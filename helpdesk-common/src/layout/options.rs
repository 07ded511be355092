//! Closed option sets shared by the box primitives

use std::fmt;

use crate::breakpoint::{resolve, ResponsiveValue};
use crate::class_list::ClassList;

/// Tailwind spacing scale steps used for gap, padding and margin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spacing {
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S8,
    S10,
    S12,
    S16,
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Spacing::S0 => "0",
            Spacing::S1 => "1",
            Spacing::S2 => "2",
            Spacing::S3 => "3",
            Spacing::S4 => "4",
            Spacing::S5 => "5",
            Spacing::S6 => "6",
            Spacing::S8 => "8",
            Spacing::S10 => "10",
            Spacing::S12 => "12",
            Spacing::S16 => "16",
        };
        f.write_str(step)
    }
}

/// Maximum content width of a container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl4,
    #[default]
    Xl7,
    Full,
}

impl MaxWidth {
    pub fn class(&self) -> &'static str {
        match self {
            MaxWidth::Sm => "max-w-sm",
            MaxWidth::Md => "max-w-md",
            MaxWidth::Lg => "max-w-lg",
            MaxWidth::Xl => "max-w-xl",
            MaxWidth::Xl2 => "max-w-2xl",
            MaxWidth::Xl4 => "max-w-4xl",
            MaxWidth::Xl7 => "max-w-7xl",
            MaxWidth::Full => "max-w-full",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Background {
    #[default]
    None,
    Muted,
    Card,
    Accent,
}

impl Background {
    pub fn class(&self) -> &'static str {
        match self {
            Background::None => "",
            Background::Muted => "bg-muted",
            Background::Card => "bg-card text-card-foreground",
            Background::Accent => "bg-accent text-accent-foreground",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shadow {
    #[default]
    None,
    Sm,
    Md,
    Lg,
}

impl Shadow {
    pub fn class(&self) -> &'static str {
        match self {
            Shadow::None => "",
            Shadow::Sm => "shadow-sm",
            Shadow::Md => "shadow-md",
            Shadow::Lg => "shadow-lg",
        }
    }
}

/// Element tag a primitive renders as.
///
/// Each component documents which tags it accepts; an unsupported tag falls
/// back to that component's default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContainerTag {
    #[default]
    Div,
    Section,
    Article,
    Aside,
    Main,
    Nav,
    Header,
    Footer,
}

impl ContainerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerTag::Div => "div",
            ContainerTag::Section => "section",
            ContainerTag::Article => "article",
            ContainerTag::Aside => "aside",
            ContainerTag::Main => "main",
            ContainerTag::Nav => "nav",
            ContainerTag::Header => "header",
            ContainerTag::Footer => "footer",
        }
    }

    /// `self` if it is in `allowed`, otherwise `fallback`
    pub fn restrict(self, allowed: &[ContainerTag], fallback: ContainerTag) -> ContainerTag {
        if allowed.contains(&self) {
            self
        } else {
            fallback
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    Row,
    Col,
    RowReverse,
    ColReverse,
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlexDirection::Row => "row",
            FlexDirection::Col => "col",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColReverse => "col-reverse",
        })
    }
}

/// Cross-axis alignment (`items-*`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
            Align::Stretch => "stretch",
            Align::Baseline => "baseline",
        })
    }
}

/// Main-axis distribution (`justify-*`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Justify {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Justify::Start => "start",
            Justify::Center => "center",
            Justify::End => "end",
            Justify::Between => "between",
            Justify::Around => "around",
            Justify::Evenly => "evenly",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wrap {
    NoWrap,
    Wrap,
    WrapReverse,
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Wrap::NoWrap => "nowrap",
            Wrap::Wrap => "wrap",
            Wrap::WrapReverse => "wrap-reverse",
        })
    }
}

/// Decoration shared by every box primitive
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    pub padding: Option<ResponsiveValue<Spacing>>,
    pub padding_x: Option<ResponsiveValue<Spacing>>,
    pub padding_y: Option<ResponsiveValue<Spacing>>,
    pub margin: Option<ResponsiveValue<Spacing>>,
    pub background: Background,
    pub border: bool,
    pub rounded: bool,
    pub shadow: Shadow,
}

impl BoxStyle {
    pub fn apply(&self, list: &mut ClassList) {
        list.extend(resolve(self.padding.as_ref(), "p"))
            .extend(resolve(self.padding_x.as_ref(), "px"))
            .extend(resolve(self.padding_y.as_ref(), "py"))
            .extend(resolve(self.margin.as_ref(), "m"))
            .push(self.background.class())
            .push_if(self.border, "border")
            .push_if(self.rounded, "rounded-lg")
            .push(self.shadow.class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointMap};

    #[test]
    fn test_box_style_default_emits_nothing() {
        let mut list = ClassList::new();
        BoxStyle::default().apply(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_box_style_decoration() {
        let style = BoxStyle {
            padding: Some(ResponsiveValue::per_breakpoint(
                BreakpointMap::new()
                    .with(Breakpoint::Sm, Spacing::S2)
                    .with(Breakpoint::Lg, Spacing::S6),
            )),
            background: Background::Card,
            border: true,
            rounded: true,
            shadow: Shadow::Sm,
            ..Default::default()
        };
        let mut list = ClassList::new();
        style.apply(&mut list);
        assert_eq!(
            list.to_string(),
            "sm:p-2 lg:p-6 bg-card text-card-foreground border rounded-lg shadow-sm"
        );
    }

    #[test]
    fn test_tag_restrict_falls_back() {
        let allowed = [ContainerTag::Div, ContainerTag::Section];
        assert_eq!(
            ContainerTag::Nav.restrict(&allowed, ContainerTag::Div),
            ContainerTag::Div
        );
        assert_eq!(
            ContainerTag::Section.restrict(&allowed, ContainerTag::Div),
            ContainerTag::Section
        );
    }
}
