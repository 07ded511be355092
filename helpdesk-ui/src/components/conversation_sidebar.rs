//! Detail-right pane: reply composer and contact details as tabs

use crate::components::badge::BadgePill;
use crate::components::layout::{AdaptiveSection, LayoutItem, ResponsiveGrid};
use crate::components::reply_composer::{ComposerActions, ReplyComposer};
use crate::components::tabs::{ItemTabs, TabItem};
use crate::display_types::{Conversation, ConversationStatus, Loadable, ReplyTemplate};
use dioxus::prelude::*;
use helpdesk_common::{
    BadgeVariant, Breakpoint, BreakpointMap, ComposerDrafts, ResponsiveValue, SelectionMode,
    Spacing, TabVariant,
};

#[component]
pub fn ConversationSidebar(
    conversation: Conversation,
    templates: Loadable<Vec<ReplyTemplate>>,
    actions: ComposerActions,
    /// Composer state per conversation, kept across tab switches
    drafts: Signal<ComposerDrafts>,
    #[props(default)] on_sent: Option<EventHandler<()>>,
    #[props(default)] on_status_changed: Option<EventHandler<ConversationStatus>>,
) -> Element {
    let mut tab = use_signal(|| "reply".to_string());

    let items = vec![
        TabItem {
            value: "reply".to_string(),
            label: "Reply".to_string(),
            icon: None,
            disabled: false,
            content: rsx! {
                ReplyComposer {
                    key: "{conversation.id}",
                    conversation: conversation.clone(),
                    templates,
                    actions,
                    drafts,
                    on_sent,
                    on_status_changed,
                }
            },
        },
        TabItem {
            value: "details".to_string(),
            label: "Details".to_string(),
            icon: None,
            disabled: false,
            content: rsx! {
                ContactDetails { conversation: conversation.clone() }
            },
        },
    ];

    rsx! {
        ItemTabs {
            items,
            selection: SelectionMode::Controlled(Some(tab())),
            on_change: move |value: String| tab.set(value),
            variant: TabVariant::Default,
            full_width: true,
            aria_label: Some("Conversation tools".to_string()),
            class: Some("flex h-full min-h-0 flex-col".to_string()),
            list_class: Some("m-3 w-auto".to_string()),
        }
    }
}

#[component]
fn ContactDetails(conversation: Conversation) -> Element {
    let fields = [
        ("Name", conversation.contact_name.clone()),
        (
            "Email",
            conversation
                .contact_email
                .clone()
                .unwrap_or_else(|| "Not provided".to_string()),
        ),
        ("Channel", conversation.channel.label().to_string()),
        (
            "Assignee",
            conversation
                .assignee
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string()),
        ),
        ("Status", conversation.status.label().to_string()),
        (
            "Last activity",
            conversation.updated_at.format("%b %-d, %H:%M").to_string(),
        ),
    ];
    let cols = ResponsiveValue::per_breakpoint(
        BreakpointMap::new()
            .with(Breakpoint::Sm, 1)
            .with(Breakpoint::Md, 2),
    );

    rsx! {
        div { class: "flex flex-col gap-6 overflow-y-auto p-4",
            AdaptiveSection {
                title: Some("Contact".to_string()),
                description: Some(conversation.subject.clone()),
                ResponsiveGrid { cols: Some(cols), gap: Some(ResponsiveValue::single(Spacing::S3)),
                    for (label, value) in fields {
                        div { key: "{label}", class: "min-w-0",
                            p { class: "text-xs text-muted-foreground", "{label}" }
                            p { class: "truncate text-sm", title: "{value}", "{value}" }
                        }
                    }
                }
            }
            if !conversation.tags.is_empty() {
                AdaptiveSection { title: Some("Tags".to_string()),
                    LayoutItem { class: Some("flex flex-wrap gap-1.5".to_string()),
                        for tag in conversation.tags.iter() {
                            BadgePill { key: "{tag}", label: tag.clone(), variant: BadgeVariant::Secondary }
                        }
                    }
                }
            }
        }
    }
}
