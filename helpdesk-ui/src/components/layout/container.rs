use super::tagged::TaggedBox;
use super::use_style_class;
use dioxus::prelude::*;
use helpdesk_common::{BoxStyle, ContainerStyle, ContainerTag, MaxWidth, ResponsiveValue, Spacing};

/// Page-level width-constrained wrapper.
///
/// Renders as `div`, `section`, `article` or `main`; any other tag falls back
/// to `div`.
#[component]
pub fn ResponsiveContainer(
    #[props(default)] max_width: MaxWidth,
    #[props(default = true)] centered: bool,
    #[props(default = true)] gutter: bool,
    #[props(default)] spacing: Option<ResponsiveValue<Spacing>>,
    #[props(default)] decoration: BoxStyle,
    #[props(default)] tag: ContainerTag,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let style = ContainerStyle {
        max_width,
        centered,
        gutter,
        spacing,
        decoration,
    };
    let classes = use_style_class((style, class), |(style, class)| {
        style.classes().finish(class.as_deref())
    });
    let tag = tag.restrict(&ContainerStyle::TAGS, ContainerTag::Div);

    rsx! {
        TaggedBox { tag, class: classes.to_string(), id, aria_label, {children} }
    }
}
