//! Small pill label

use dioxus::prelude::*;
use helpdesk_common::{BadgeVariant, ClassList};

#[component]
pub fn BadgePill(
    label: String,
    #[props(default)] variant: BadgeVariant,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut list = ClassList::base(
        "inline-flex items-center rounded-full px-2 py-0.5 text-[11px] font-medium leading-4 whitespace-nowrap",
    );
    list.push(variant.class());

    rsx! {
        span { class: list.finish(class.as_deref()), "{label}" }
    }
}
