//! Thread viewer for the open conversation

use crate::components::badge::BadgePill;
use crate::components::layout::use_responsive_classes;
use crate::components::skeleton::SkeletonRows;
use crate::components::tabs::{ComposedTabs, TabListSpec, TabPanel, TabTriggerSpec};
use crate::components::utils::format_message_time;
use crate::display_types::{Conversation, ConversationStatus, Loadable, Message, MessageDirection};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use helpdesk_common::{
    BadgeVariant, Breakpoint, BreakpointMap, ClassList, ResponsiveValue, SelectionMode, Spacing,
    TabSize, TabVariant,
};

#[component]
pub fn MessageThread(
    conversation: Option<Conversation>,
    messages: Loadable<Vec<Message>>,
) -> Element {
    let Some(conversation) = conversation else {
        return rsx! {
            div { class: "flex h-full items-center justify-center p-6 text-sm text-muted-foreground",
                "Select a conversation to read it"
            }
        };
    };
    let now = Utc::now();
    let status_variant = match conversation.status {
        ConversationStatus::Open => BadgeVariant::Default,
        ConversationStatus::Snoozed => BadgeVariant::Warning,
        ConversationStatus::Closed => BadgeVariant::Success,
    };

    rsx! {
        article { class: "flex h-full min-h-0 flex-col",
            header { class: "flex items-start justify-between gap-3 border-b border-border px-4 py-3",
                div { class: "min-w-0",
                    h2 { class: "truncate text-base font-semibold", "{conversation.subject}" }
                    p { class: "truncate text-xs text-muted-foreground",
                        "{conversation.contact_name}"
                        if let Some(email) = conversation.contact_email.as_deref() {
                            " <{email}>"
                        }
                        " · {conversation.channel.label()}"
                    }
                }
                BadgePill { label: conversation.status.label().to_string(), variant: status_variant }
            }
            match messages {
                Loadable::Loading => rsx! {
                    SkeletonRows { count: 4, row_class: "h-14".to_string() }
                },
                Loadable::Failed(error) => rsx! {
                    p { class: "p-4 text-sm text-destructive", role: "alert", "Couldn't load messages: {error}" }
                },
                Loadable::Ready(messages) => {
                    let notes: Vec<Message> = messages
                        .iter()
                        .filter(|m| m.direction == MessageDirection::Note)
                        .cloned()
                        .collect();
                    let list = TabListSpec {
                        triggers: vec![
                            TabTriggerSpec::new("all", "Conversation"),
                            TabTriggerSpec::new("notes", format!("Notes ({})", notes.len())),
                        ],
                        aria_label: Some("Thread view".to_string()),
                        class: Some("mx-4 mt-2".to_string()),
                        trigger_class: None,
                    };
                    rsx! {
                        ComposedTabs {
                            list,
                            selection: SelectionMode::Uncontrolled {
                                default: Some("all".to_string()),
                            },
                            variant: TabVariant::Underline,
                            size: TabSize::Sm,
                            class: Some("flex min-h-0 flex-1 flex-col".to_string()),
                            TabPanel {
                                value: "all".to_string(),
                                class: Some("min-h-0 flex-1 overflow-y-auto".to_string()),
                                MessageList { messages, now }
                            }
                            TabPanel {
                                value: "notes".to_string(),
                                class: Some("min-h-0 flex-1 overflow-y-auto".to_string()),
                                if notes.is_empty() {
                                    p { class: "p-6 text-center text-sm text-muted-foreground", "No internal notes" }
                                } else {
                                    MessageList { messages: notes, now }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageList(messages: Vec<Message>, now: DateTime<Utc>) -> Element {
    let padding = use_responsive_classes(
        Some(ResponsiveValue::per_breakpoint(
            BreakpointMap::new()
                .with(Breakpoint::Sm, Spacing::S4)
                .with(Breakpoint::Lg, Spacing::S6),
        )),
        "p",
    );
    let mut list = ClassList::base("flex flex-col gap-3 p-3");
    list.extend(padding.iter().cloned());

    rsx! {
        ol { class: list.finish(None), aria_label: "Messages",
            for message in messages {
                MessageBubble {
                    key: "{message.id}",
                    time: format_message_time(message.sent_at, now),
                    message: message.clone(),
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: Message, time: String) -> Element {
    let mut row = ClassList::base("flex flex-col gap-1 max-w-[85%]");
    let mut bubble = ClassList::base("whitespace-pre-wrap rounded-lg px-3 py-2 text-sm");
    match message.direction {
        MessageDirection::Inbound => {
            row.push("self-start");
            bubble.push("bg-muted text-foreground");
        }
        MessageDirection::Outbound => {
            row.push("self-end items-end");
            bubble.push("bg-primary text-primary-foreground");
        }
        MessageDirection::Note => {
            row.push("self-stretch max-w-none");
            bubble.push("border border-dashed border-amber-400 bg-amber-50 text-amber-900");
        }
    }
    let kind = match message.direction {
        MessageDirection::Note => " · internal note",
        _ => "",
    };

    rsx! {
        li { class: row.finish(None),
            span { class: "text-[11px] text-muted-foreground", "{message.author} · {time}{kind}" }
            div { class: bubble.finish(None), "{message.body}" }
        }
    }
}
