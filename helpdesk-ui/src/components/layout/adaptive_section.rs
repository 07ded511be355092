use super::tagged::TaggedBox;
use super::use_style_class;
use dioxus::prelude::*;
use helpdesk_common::{Breakpoint, BoxStyle, ContainerTag, ResponsiveValue, SectionStyle, Spacing};

/// Titled section. The header (title, description, actions) stacks on small
/// screens and becomes a single row from `header_row_from` upwards.
///
/// Defaults to a `section` element; `article`, `aside` and `div` are also
/// accepted.
#[component]
pub fn AdaptiveSection(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] actions: Option<Element>,
    #[props(default = Some(Spacing::S4.into()))] spacing: Option<ResponsiveValue<Spacing>>,
    #[props(default = Breakpoint::Sm)] header_row_from: Breakpoint,
    #[props(default)] decoration: BoxStyle,
    #[props(default = ContainerTag::Section)] tag: ContainerTag,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let style = SectionStyle {
        spacing,
        header_row_from,
        decoration,
    };
    let header_class = style.header_classes().finish(None);
    let classes = use_style_class((style, class), |(style, class)| {
        style.classes().finish(class.as_deref())
    });
    let tag = tag.restrict(&SectionStyle::TAGS, ContainerTag::Section);
    let has_header = title.is_some() || description.is_some() || actions.is_some();

    rsx! {
        TaggedBox { tag, class: classes.to_string(), id, aria_label: title.clone(),
            if has_header {
                div { class: "{header_class}",
                    div { class: "min-w-0 space-y-1",
                        if let Some(title) = title {
                            h2 { class: "text-lg font-semibold tracking-tight", "{title}" }
                        }
                        if let Some(description) = description {
                            p { class: "text-sm text-muted-foreground", "{description}" }
                        }
                    }
                    if let Some(actions) = actions {
                        div { class: "flex shrink-0 items-center gap-2", {actions} }
                    }
                }
            }
            {children}
        }
    }
}
