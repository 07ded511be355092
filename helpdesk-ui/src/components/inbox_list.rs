//! Left pane: inbox picker and fixed conversation filters

use crate::components::icons::{ChevronDownIcon, FilterIconView};
use crate::components::skeleton::Skeleton;
use crate::display_types::{Inbox, Loadable};
use dioxus::prelude::*;
use helpdesk_common::{ClassList, FilterCounts, InboxFilter};

#[component]
pub fn InboxList(
    inboxes: Loadable<Vec<Inbox>>,
    selected_inbox: Option<String>,
    on_select_inbox: EventHandler<String>,
    filter: InboxFilter,
    counts: Loadable<FilterCounts>,
    on_select_filter: EventHandler<InboxFilter>,
) -> Element {
    rsx! {
        div { class: "flex h-full flex-col gap-4 overflow-y-auto p-3",
            div { class: "space-y-1.5",
                label {
                    r#for: "inbox-select",
                    class: "px-1 text-xs font-medium uppercase tracking-wide text-muted-foreground",
                    "Inbox"
                }
                match inboxes {
                    Loadable::Loading => rsx! {
                        Skeleton { class: Some("h-9 w-full".to_string()) }
                    },
                    Loadable::Failed(error) => rsx! {
                        p { class: "px-1 text-sm text-destructive", role: "alert", "Couldn't load inboxes: {error}" }
                    },
                    Loadable::Ready(inboxes) => rsx! {
                        InboxSelect { inboxes, selected: selected_inbox, on_select: on_select_inbox }
                    },
                }
            }
            nav { aria_label: "Conversation filters",
                ul { class: "flex flex-col gap-0.5",
                    for f in InboxFilter::ALL {
                        li { key: "{f.id()}",
                            FilterButton {
                                filter: f,
                                active: f == filter,
                                count: counts.ready().map(|c| c.get(f)),
                                loading: counts.is_loading(),
                                on_select: on_select_filter,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InboxSelect(
    inboxes: Vec<Inbox>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    if inboxes.is_empty() {
        return rsx! {
            p { class: "px-1 text-sm text-muted-foreground", "No inboxes in this workspace" }
        };
    }
    let selected = selected.unwrap_or_default();

    rsx! {
        div { class: "relative",
            select {
                id: "inbox-select",
                class: "h-9 w-full appearance-none rounded-md border border-input bg-background pl-3 pr-8 text-sm focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring",
                value: "{selected}",
                onchange: move |e| on_select.call(e.value()),
                if selected.is_empty() {
                    option { value: "", disabled: true, selected: true, "Select an inbox" }
                }
                for inbox in inboxes {
                    option {
                        key: "{inbox.id}",
                        value: "{inbox.id}",
                        selected: inbox.id == selected,
                        "{inbox.name}"
                    }
                }
            }
            span { class: "pointer-events-none absolute right-2 top-1/2 -translate-y-1/2 text-muted-foreground",
                ChevronDownIcon {}
            }
        }
    }
}

#[component]
fn FilterButton(
    filter: InboxFilter,
    active: bool,
    count: Option<u32>,
    loading: bool,
    on_select: EventHandler<InboxFilter>,
) -> Element {
    let mut list = ClassList::base(
        "flex w-full items-center gap-2 rounded-md px-2 py-1.5 text-sm transition-colors hover:bg-accent focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring",
    );
    list.push_if(active, "bg-accent font-medium text-accent-foreground");
    list.push_if(!active, "text-muted-foreground");

    rsx! {
        button {
            r#type: "button",
            class: list.finish(None),
            aria_current: if active { Some("page") } else { None },
            onclick: move |_| on_select.call(filter),
            FilterIconView { icon: filter.icon() }
            span { class: "flex-1 truncate text-left", "{filter.label()}" }
            if loading {
                Skeleton { class: Some("h-4 w-6".to_string()) }
            } else if let Some(count) = count {
                span { class: "text-xs tabular-nums text-muted-foreground", "{count}" }
            }
        }
    }
}
