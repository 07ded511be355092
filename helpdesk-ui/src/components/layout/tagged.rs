use dioxus::prelude::*;
use helpdesk_common::ContainerTag;

/// One element whose tag is picked at render time
#[component]
pub(crate) fn TaggedBox(
    tag: ContainerTag,
    class: String,
    #[props(default)] style: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    children: Element,
) -> Element {
    let style = style.as_deref();
    let id = id.as_deref();
    let aria_label = aria_label.as_deref();

    match tag {
        ContainerTag::Div => rsx! {
            div { class, style, id, aria_label, {children} }
        },
        ContainerTag::Section => rsx! {
            section { class, style, id, aria_label, {children} }
        },
        ContainerTag::Article => rsx! {
            article { class, style, id, aria_label, {children} }
        },
        ContainerTag::Aside => rsx! {
            aside { class, style, id, aria_label, {children} }
        },
        ContainerTag::Main => rsx! {
            main { class, style, id, aria_label, {children} }
        },
        ContainerTag::Nav => rsx! {
            nav { class, style, id, aria_label, {children} }
        },
        ContainerTag::Header => rsx! {
            header { class, style, id, aria_label, {children} }
        },
        ContainerTag::Footer => rsx! {
            footer { class, style, id, aria_label, {children} }
        },
    }
}
