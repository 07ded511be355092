//! Selectable list row
//!
//! Renders as an anchor when it has an `href` and as a button otherwise, so
//! it is always reachable by keyboard. Long previews are clamped visually but
//! stay complete in the DOM.

use crate::components::badge::BadgePill;
use dioxus::prelude::*;
use helpdesk_common::{
    accessible_label, badge_strip, key_activation, row_class, shows_meta_divider, Badge,
    KeyActivation, MetaItem, RowElement,
};

#[component]
pub fn EntityListRow(
    subject: String,
    #[props(default)] preview: Option<String>,
    #[props(default)] href: Option<String>,
    #[props(default)] selected: bool,
    #[props(default)] badges: Vec<Badge>,
    #[props(default)] meta: Vec<MetaItem>,
    /// Avatar or channel icon
    #[props(default)]
    leading: Option<Element>,
    /// Right-aligned text next to the subject, usually a timestamp
    #[props(default)]
    trailing: Option<String>,
    /// Bold subject for unread items
    #[props(default)]
    emphasized: bool,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] on_click: Option<EventHandler<()>>,
    #[props(default)] class: Option<String>,
) -> Element {
    let element = RowElement::for_href(href.as_deref());
    let label = accessible_label(&subject, preview.as_deref(), aria_label.as_deref());
    let class = row_class(selected, class.as_deref());
    let href_for_keys = href.clone();

    let activate = move || match on_click {
        Some(handler) => handler.call(()),
        None => {
            if let Some(href) = href_for_keys.as_deref() {
                follow_link(href);
            }
        }
    };
    let activate_on_click = activate.clone();
    let onkeydown = move |e: KeyboardEvent| match key_activation(element, &e.key().to_string()) {
        KeyActivation::Handle => {
            e.prevent_default();
            activate();
        }
        KeyActivation::Native | KeyActivation::Ignore => {}
    };

    let body = rsx! {
        RowBody {
            subject,
            preview,
            badges,
            meta,
            leading,
            trailing,
            emphasized,
        }
    };

    match element {
        RowElement::Anchor => rsx! {
            a {
                class,
                href: href.as_deref(),
                aria_label: "{label}",
                aria_current: element.aria_current(selected),
                onclick: move |_| {
                    if let Some(handler) = on_click {
                        handler.call(());
                    }
                },
                onkeydown: onkeydown,
                {body}
            }
        },
        RowElement::Button => rsx! {
            button {
                class,
                r#type: "button",
                aria_label: "{label}",
                onclick: move |_| activate_on_click(),
                onkeydown: onkeydown,
                {body}
            }
        },
    }
}

#[component]
fn RowBody(
    subject: String,
    preview: Option<String>,
    badges: Vec<Badge>,
    meta: Vec<MetaItem>,
    leading: Option<Element>,
    trailing: Option<String>,
    emphasized: bool,
) -> Element {
    let strip = badge_strip(&badges);
    let visible = strip.visible.to_vec();
    let overflow = strip.overflow_badge();
    let divider = shows_meta_divider(preview.as_deref(), &meta);
    let subject_class = if emphasized {
        "truncate text-sm font-semibold text-foreground"
    } else {
        "truncate text-sm font-medium text-foreground/90"
    };

    rsx! {
        if let Some(leading) = leading {
            div { class: "mt-0.5 shrink-0", {leading} }
        }
        div { class: "flex min-w-0 flex-1 flex-col gap-1",
            div { class: "flex items-baseline gap-2",
                span { class: "{subject_class} flex-1", "{subject}" }
                if let Some(trailing) = trailing {
                    span { class: "shrink-0 text-xs text-muted-foreground", "{trailing}" }
                }
            }
            if !visible.is_empty() {
                div { class: "flex flex-wrap items-center gap-1.5",
                    for badge in visible {
                        BadgePill { key: "{badge.label}", label: badge.label.clone(), variant: badge.variant }
                    }
                    if let Some(overflow) = overflow {
                        BadgePill { label: overflow.label, variant: overflow.variant }
                    }
                }
            }
            if let Some(preview) = preview {
                p { class: "line-clamp-2 text-xs text-muted-foreground", "{preview}" }
            }
            if divider {
                div { class: "h-px w-full bg-border", aria_hidden: "true" }
            }
            if !meta.is_empty() {
                div { class: "flex flex-wrap items-center gap-x-3 gap-y-0.5",
                    for item in meta.iter() {
                        span { key: "{item.label}", class: "text-[11px] text-muted-foreground",
                            span { class: "font-medium", "{item.label}: " }
                            "{item.value}"
                        }
                    }
                }
            }
        }
    }
}

fn follow_link(href: &str) {
    let Some(window) = web_sys_x::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        tracing::warn!("Failed to follow {}: {:?}", href, e);
    }
}
