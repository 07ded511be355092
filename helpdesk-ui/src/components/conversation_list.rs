//! Center pane: conversations matching the selected inbox and filter

use std::rc::Rc;

use crate::components::entity_list_row::EntityListRow;
use crate::components::icons::{MailIcon, MessageSquareIcon};
use crate::components::skeleton::SkeletonRows;
use crate::components::utils::{format_relative_time, initials};
use crate::components::virtual_list::{RenderFn, VirtualList};
use crate::display_types::{Channel, Conversation, ConversationStatus, Loadable};
use dioxus::prelude::*;
use helpdesk_common::{Badge, BadgeVariant, InboxFilter, MetaItem};

/// Height of one conversation row in pixels
const ROW_HEIGHT: f64 = 132.0;

#[component]
pub fn ConversationList(
    conversations: Loadable<Vec<Conversation>>,
    filter: InboxFilter,
    selected_id: Option<String>,
    on_open: EventHandler<Conversation>,
) -> Element {
    rsx! {
        div { class: "flex h-full min-h-0 flex-col",
            div { class: "flex items-center justify-between border-b border-border px-4 py-3",
                h2 { class: "text-sm font-semibold", "{filter.label()}" }
                if let Some(list) = conversations.ready() {
                    span { class: "text-xs text-muted-foreground", "{list.len()}" }
                }
            }
            match &conversations {
                Loadable::Loading => rsx! {
                    SkeletonRows { count: 8, row_class: "h-20".to_string() }
                },
                Loadable::Failed(error) => rsx! {
                    p { class: "p-4 text-sm text-destructive", role: "alert",
                        "Couldn't load conversations: {error}"
                    }
                },
                Loadable::Ready(list) if list.is_empty() => rsx! {
                    p { class: "p-6 text-center text-sm text-muted-foreground",
                        "No conversations here"
                    }
                },
                Loadable::Ready(list) => rsx! {
                    VirtualList {
                        items: list.clone(),
                        row_height: ROW_HEIGHT,
                        aria_label: Some(filter.label().to_string()),
                        class: "min-h-0 flex-1 px-2 py-1".to_string(),
                        render_item: conversation_row(selected_id.clone(), on_open),
                    }
                },
            }
        }
    }
}

fn conversation_row(
    selected_id: Option<String>,
    on_open: EventHandler<Conversation>,
) -> RenderFn<Conversation> {
    let now = chrono::Utc::now();
    RenderFn(Rc::new(move |conversation: Conversation, _idx| {
        let selected = selected_id.as_deref() == Some(conversation.id.as_str());
        let opened = conversation.clone();
        rsx! {
            EntityListRow {
                subject: conversation.subject.clone(),
                preview: conversation.preview.clone(),
                selected,
                emphasized: conversation.unread,
                badges: conversation_badges(&conversation),
                meta: conversation_meta(&conversation),
                trailing: Some(format_relative_time(conversation.updated_at, now)),
                leading: Some(rsx! {
                    ContactAvatar { name: conversation.contact_name.clone(), channel: conversation.channel }
                }),
                on_click: move |_| on_open.call(opened.clone()),
                class: Some("h-[128px] overflow-hidden".to_string()),
            }
        }
    }))
}

fn conversation_badges(conversation: &Conversation) -> Vec<Badge> {
    let status = match conversation.status {
        ConversationStatus::Open => None,
        ConversationStatus::Snoozed => Some(BadgeVariant::Warning),
        ConversationStatus::Closed => Some(BadgeVariant::Success),
    };
    status
        .map(|variant| Badge::new(conversation.status.label(), variant))
        .into_iter()
        .chain(
            conversation
                .tags
                .iter()
                .map(|tag| Badge::new(tag.clone(), BadgeVariant::Secondary)),
        )
        .collect()
}

fn conversation_meta(conversation: &Conversation) -> Vec<MetaItem> {
    let mut meta = vec![MetaItem::new("From", conversation.contact_name.clone())];
    meta.push(MetaItem::new(
        "Assignee",
        conversation
            .assignee
            .clone()
            .unwrap_or_else(|| "Unassigned".to_string()),
    ));
    meta
}

#[component]
fn ContactAvatar(name: String, channel: Channel) -> Element {
    rsx! {
        div { class: "relative",
            div { class: "flex h-8 w-8 items-center justify-center rounded-full bg-muted text-xs font-semibold text-muted-foreground",
                "{initials(&name)}"
            }
            span {
                class: "absolute -bottom-1 -right-1 rounded-full bg-background p-0.5 text-muted-foreground",
                title: "{channel.label()}",
                match channel {
                    Channel::Email => rsx! { MailIcon { class: "w-3 h-3" } },
                    _ => rsx! { MessageSquareIcon { class: "w-3 h-3" } },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn conversation(status: ConversationStatus, tags: &[&str]) -> Conversation {
        Conversation {
            id: "c1".to_string(),
            inbox_id: "support".to_string(),
            subject: "Refund".to_string(),
            preview: None,
            contact_name: "Ada Lovelace".to_string(),
            contact_email: None,
            channel: Channel::Email,
            status,
            assignee: None,
            updated_at: Utc::now(),
            unread: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_closed_status_leads_badges() {
        let badges =
            conversation_badges(&conversation(ConversationStatus::Closed, &["vip", "billing"]));
        let labels: Vec<_> = badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Closed", "vip", "billing"]);
    }

    #[test]
    fn test_open_status_has_no_badge() {
        let badges = conversation_badges(&conversation(ConversationStatus::Open, &[]));
        assert!(badges.is_empty());
    }

    #[test]
    fn test_unassigned_meta() {
        let meta = conversation_meta(&conversation(ConversationStatus::Open, &[]));
        assert_eq!(meta[1], MetaItem::new("Assignee", "Unassigned"));
    }
}
