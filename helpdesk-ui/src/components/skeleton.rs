//! Loading placeholders

use dioxus::prelude::*;
use helpdesk_common::ClassList;

/// Pulsing placeholder block. Size it with `class`.
#[component]
pub fn Skeleton(#[props(default)] class: Option<String>) -> Element {
    let list = ClassList::base("animate-pulse rounded-md bg-muted");
    rsx! {
        div { class: list.finish(class.as_deref()), aria_hidden: "true" }
    }
}

/// Stack of row-shaped placeholders for lists still loading
#[component]
pub fn SkeletonRows(
    #[props(default = 6)] count: usize,
    #[props(default = "h-16".to_string())] row_class: String,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2 p-2",
            role: "status",
            aria_label: "Loading",
            for i in 0..count {
                Skeleton { key: "{i}", class: Some(row_class.clone()) }
            }
        }
    }
}
