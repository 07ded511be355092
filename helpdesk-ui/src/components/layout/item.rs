use super::tagged::TaggedBox;
use super::use_style_class;
use dioxus::prelude::*;
use helpdesk_common::{Breakpoint, BoxStyle, ContainerTag, ItemStyle, ResponsiveValue};

/// Child of a grid or flex primitive: spans, ordering, growth and
/// breakpoint-gated visibility.
///
/// Accepts `div`, `section`, `nav`, `header`, `footer` and `aside`.
#[component]
pub fn LayoutItem(
    #[props(default)] col_span: Option<ResponsiveValue<u8>>,
    #[props(default)] row_span: Option<ResponsiveValue<u8>>,
    #[props(default)] order: Option<ResponsiveValue<u8>>,
    #[props(default)] grow: bool,
    #[props(default)] no_shrink: bool,
    #[props(default)] show_from: Option<Breakpoint>,
    #[props(default)] decoration: BoxStyle,
    #[props(default)] tag: ContainerTag,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let style = ItemStyle {
        col_span,
        row_span,
        order,
        grow,
        no_shrink,
        show_from,
        decoration,
    };
    let classes = use_style_class((style, class), |(style, class)| {
        style.classes().finish(class.as_deref())
    });
    let tag = tag.restrict(&ItemStyle::TAGS, ContainerTag::Div);

    rsx! {
        TaggedBox { tag, class: classes.to_string(), id, aria_label, {children} }
    }
}
