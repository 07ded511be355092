//! The inbox screen
//!
//! Owns the dashboard selection store and every backend query, and hands
//! plain values down to the shell and its panes.

use crate::api::{ApiError, HelpdeskApi};
use crate::config::AppConfig;
use dioxus::prelude::*;
use helpdesk_common::{ComposerDrafts, FilterCounts, InboxFilter};
use helpdesk_ui::stores::{DashboardState, DashboardStateStoreExt};
use helpdesk_ui::{
    use_viewport_provider, AsyncAction, ComposerActions, ConversationList, ConversationSidebar,
    Conversation, ConversationStatus, InboxList, Loadable, MasterDetailShell, MessageThread,
};

/// Log a failed query and turn it into the message its view shows
fn query_error(what: &str, error: ApiError) -> String {
    tracing::error!("Failed to load {}: {}", what, error);
    error.to_string()
}

fn composer_actions(api: &HelpdeskApi) -> ComposerActions {
    let send_api = api.clone();
    let suggest_api = api.clone();
    let translate_api = api.clone();
    let status_api = api.clone();
    ComposerActions {
        send: AsyncAction::new(move |(id, text): (String, String)| {
            let api = send_api.clone();
            async move { api.send_reply(&id, &text).await.map_err(|e| e.to_string()) }
        }),
        suggest: AsyncAction::new(move |id: String| {
            let api = suggest_api.clone();
            async move { api.suggest_reply(&id).await.map_err(|e| e.to_string()) }
        }),
        translate: AsyncAction::new(move |(text, language): (String, String)| {
            let api = translate_api.clone();
            async move {
                api.translate(&text, &language)
                    .await
                    .map_err(|e| e.to_string())
            }
        }),
        set_status: AsyncAction::new(move |(id, status): (String, ConversationStatus)| {
            let api = status_api.clone();
            async move { api.set_status(&id, status).await.map_err(|e| e.to_string()) }
        }),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<AppConfig>();
    let api = use_context::<HelpdeskApi>();
    let viewport = use_viewport_provider(config.thresholds());
    let mut state = use_store(DashboardState::default);
    // Bumped after a write so lists and the thread refetch
    let mut refresh = use_signal(|| 0u32);
    let drafts = use_signal(ComposerDrafts::default);

    let inboxes = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.fetch_inboxes()
                    .await
                    .map_err(|e| query_error("inboxes", e))
            }
        }
    });

    let counts = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let inbox_id = state.inbox_id().read().clone();
            let _ = refresh();
            async move {
                let Some(inbox_id) = inbox_id else {
                    return Ok(FilterCounts::default());
                };
                api.fetch_filter_counts(&inbox_id)
                    .await
                    .map_err(|e| query_error("filter counts", e))
            }
        }
    });

    let conversations = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let inbox_id = state.inbox_id().read().clone();
            let filter = *state.filter().read();
            let _ = refresh();
            async move {
                let Some(inbox_id) = inbox_id else {
                    return Ok(Vec::new());
                };
                api.fetch_conversations(&inbox_id, filter)
                    .await
                    .map_err(|e| query_error("conversations", e))
            }
        }
    });

    let messages = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let conversation_id = state
                .conversation()
                .read()
                .as_ref()
                .map(|c| c.id.clone());
            let _ = refresh();
            async move {
                let Some(conversation_id) = conversation_id else {
                    return Ok(Vec::new());
                };
                api.fetch_messages(&conversation_id)
                    .await
                    .map_err(|e| query_error("messages", e))
            }
        }
    });

    let templates = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.fetch_templates()
                    .await
                    .map_err(|e| query_error("reply templates", e))
            }
        }
    });

    // Land on the first inbox once the list arrives
    use_effect(move || {
        if let Some(Ok(list)) = &*inboxes.read() {
            if state.inbox_id().peek().is_none() {
                if let Some(first) = list.first() {
                    state.write().select_inbox(first.id.clone());
                }
            }
        }
    });

    let snapshot = state.read().clone();
    let inbox_list = Loadable::from_resource(inboxes.read().as_ref());
    let counts = Loadable::from_resource(counts.read().as_ref());
    let conversations = Loadable::from_resource(conversations.read().as_ref());
    let messages = Loadable::from_resource(messages.read().as_ref());
    let templates = Loadable::from_resource(templates.read().as_ref());

    let selected = snapshot.current_conversation(conversations.ready().map(Vec::as_slice));

    let detail_right = selected.clone().map(|conversation| {
        rsx! {
            ConversationSidebar {
                key: "{conversation.id}",
                conversation,
                templates,
                actions: composer_actions(&api),
                drafts,
                on_sent: move |_| refresh += 1,
                on_status_changed: move |status: ConversationStatus| {
                    tracing::debug!("Conversation moved to {}", status.label());
                    state.write().set_open_status(status);
                    refresh += 1;
                },
            }
        }
    });

    rsx! {
        MasterDetailShell {
            is_mobile: viewport().is_mobile(),
            is_detail: snapshot.is_detail,
            left: rsx! {
                InboxList {
                    inboxes: inbox_list,
                    selected_inbox: snapshot.inbox_id.clone(),
                    on_select_inbox: move |id: String| {
                        tracing::debug!("Selecting inbox {}", id);
                        state.write().select_inbox(id);
                    },
                    filter: snapshot.filter,
                    counts,
                    on_select_filter: move |filter: InboxFilter| {
                        tracing::debug!("Selecting filter {}", filter.id());
                        state.write().select_filter(filter);
                    },
                }
            },
            center: rsx! {
                ConversationList {
                    conversations,
                    filter: snapshot.filter,
                    selected_id: snapshot.conversation_id().map(str::to_string),
                    on_open: move |conversation: Conversation| {
                        tracing::debug!("Opening conversation {}", conversation.id);
                        state.write().open_conversation(conversation);
                    },
                }
            },
            detail_left: rsx! {
                MessageThread { conversation: selected, messages }
            },
            detail_right,
            on_back: move |_| {
                state.write().back_to_list();
            },
        }
    }
}
