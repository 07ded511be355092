use super::tagged::TaggedBox;
use super::use_style_class;
use dioxus::prelude::*;
use helpdesk_common::{
    Align, BoxStyle, ContainerTag, FlexDirection, FlexStyle, Justify, ResponsiveValue, Spacing,
    Wrap,
};

/// Flexbox row or column with per-breakpoint direction, alignment and gap.
///
/// Accepts `div`, `section`, `nav`, `header`, `footer` and `aside`.
#[component]
pub fn ResponsiveFlex(
    #[props(default)] direction: Option<ResponsiveValue<FlexDirection>>,
    #[props(default)] align: Option<ResponsiveValue<Align>>,
    #[props(default)] justify: Option<ResponsiveValue<Justify>>,
    #[props(default)] wrap: Option<ResponsiveValue<Wrap>>,
    #[props(default)] gap: Option<ResponsiveValue<Spacing>>,
    #[props(default)] inline: bool,
    #[props(default)] decoration: BoxStyle,
    #[props(default)] tag: ContainerTag,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let style = FlexStyle {
        direction,
        align,
        justify,
        wrap,
        gap,
        inline,
        decoration,
    };
    let classes = use_style_class((style, class), |(style, class)| {
        style.classes().finish(class.as_deref())
    });
    let tag = tag.restrict(&FlexStyle::TAGS, ContainerTag::Div);

    rsx! {
        TaggedBox { tag, class: classes.to_string(), id, aria_label, {children} }
    }
}
