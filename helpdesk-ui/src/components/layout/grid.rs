use super::tagged::TaggedBox;
use super::use_style_class;
use dioxus::prelude::*;
use helpdesk_common::{Align, BoxStyle, ContainerTag, GridStyle, ResponsiveValue, Spacing};

/// CSS grid with per-breakpoint columns, or auto-fit columns of a minimum
/// width. With `auto_fit` set, `cols` is ignored.
///
/// Accepts `div`, `section`, `nav`, `header`, `footer` and `aside`.
#[component]
pub fn ResponsiveGrid(
    #[props(default)] cols: Option<ResponsiveValue<u8>>,
    #[props(default)] rows: Option<ResponsiveValue<u8>>,
    #[props(default)] gap: Option<ResponsiveValue<Spacing>>,
    #[props(default)] align: Option<ResponsiveValue<Align>>,
    #[props(default)] auto_fit: bool,
    #[props(default)] min_col_width: Option<String>,
    #[props(default)] decoration: BoxStyle,
    #[props(default)] tag: ContainerTag,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let style = GridStyle {
        cols,
        rows,
        gap,
        align,
        auto_fit,
        min_col_width,
        decoration,
    };
    let inline_style = style.output().style;
    let classes = use_style_class((style, class), |(style, class)| {
        style.output().classes.finish(class.as_deref())
    });
    let tag = tag.restrict(&GridStyle::TAGS, ContainerTag::Div);

    rsx! {
        TaggedBox {
            tag,
            class: classes.to_string(),
            style: inline_style,
            id,
            aria_label,
            {children}
        }
    }
}
