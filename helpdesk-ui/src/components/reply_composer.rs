//! Right pane: reply composer and conversation actions
//!
//! Drafting state is a [`ComposerState`] reducer per conversation, held in a
//! [`ComposerDrafts`] signal owned by the screen, so a draft survives the
//! composer being unmounted by a tab switch or a closed sheet. Each backend
//! call runs under a [`BusyGuard`](helpdesk_common::BusyGuard) whose writes
//! go through `try_write`, so nothing is written once the owner is gone.
//! Failures are logged and raised as toasts; they never propagate.

use crate::components::icons::{FileTextIcon, LanguagesIcon, LoaderIcon, SendIcon, SparklesIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{
    ActionFuture, AsyncAction, Conversation, ConversationStatus, Loadable, ReplyTemplate,
    TRANSLATION_LANGUAGES,
};
use crate::stores::toasts::{try_use_toaster, Toaster};
use dioxus::prelude::*;
use helpdesk_common::{run_guarded, ComposerAction, ComposerDrafts, ComposerState, ComposerTask};

/// Backend calls the composer makes
#[derive(Clone, PartialEq)]
pub struct ComposerActions {
    /// `(conversation id, text)`
    pub send: AsyncAction<(String, String), ()>,
    /// Suggested reply for a conversation id
    pub suggest: AsyncAction<String, String>,
    /// `(text, language code)` to translated text
    pub translate: AsyncAction<(String, String), String>,
    pub set_status: AsyncAction<(String, ConversationStatus), ()>,
}

/// Composer for one conversation. Its draft lives in `drafts` under the
/// conversation id.
#[component]
pub fn ReplyComposer(
    conversation: Conversation,
    templates: Loadable<Vec<ReplyTemplate>>,
    actions: ComposerActions,
    drafts: Signal<ComposerDrafts>,
    #[props(default)] on_sent: Option<EventHandler<()>>,
    #[props(default)] on_status_changed: Option<EventHandler<ConversationStatus>>,
) -> Element {
    let mut status_busy = use_signal(|| false);
    let toaster = try_use_toaster();
    let snapshot = drafts.read().get(&conversation.id);
    let draft = Draft {
        drafts,
        conversation_id: conversation.id.clone(),
    };

    let send_action = actions.send.clone();
    let send_draft = draft.clone();
    let on_send = move |_: MouseEvent| {
        let current = send_draft.peek();
        if !current.can_send() {
            return;
        }
        let call = send_action.call((send_draft.conversation_id.clone(), current.draft));
        let draft = send_draft.clone();
        spawn(async move {
            match draft.guarded(ComposerTask::Send, call).await {
                Ok(()) => {
                    draft.dispatch(ComposerAction::Sent);
                    if let Some(toaster) = toaster {
                        toaster.success("Reply sent");
                    }
                    if let Some(handler) = on_sent {
                        handler.call(());
                    }
                }
                Err(e) => draft.report(toaster, ComposerTask::Send, e),
            }
        });
    };

    let suggest_action = actions.suggest.clone();
    let suggest_draft = draft.clone();
    let on_suggest = move |_: MouseEvent| {
        let call = suggest_action.call(suggest_draft.conversation_id.clone());
        let draft = suggest_draft.clone();
        spawn(async move {
            match draft.guarded(ComposerTask::Suggest, call).await {
                Ok(text) => draft.dispatch(ComposerAction::Suggested(text)),
                Err(e) => draft.report(toaster, ComposerTask::Suggest, e),
            }
        });
    };

    let translate_action = actions.translate.clone();
    let translate_draft = draft.clone();
    let on_translate = move |_: MouseEvent| {
        let current = translate_draft.peek();
        if !current.can_translate() {
            return;
        }
        let Some(language) = current.language else {
            return;
        };
        let call = translate_action.call((current.draft, language));
        let draft = translate_draft.clone();
        spawn(async move {
            match draft.guarded(ComposerTask::Translate, call).await {
                Ok(text) => draft.dispatch(ComposerAction::Translated(text)),
                Err(e) => draft.report(toaster, ComposerTask::Translate, e),
            }
        });
    };

    let conversation_id = conversation.id.clone();
    let status_action = actions.set_status.clone();
    let set_status = move |status: ConversationStatus| {
        let call = status_action.call((conversation_id.clone(), status));
        spawn(async move {
            let result = run_guarded(
                move |busy| {
                    if let Ok(mut flag) = status_busy.try_write() {
                        *flag = busy;
                    }
                },
                call,
            )
            .await;
            match result {
                Ok(()) => {
                    if let Some(handler) = on_status_changed {
                        handler.call(status);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to mark conversation {}: {}", status.id(), e);
                    if let Some(toaster) = toaster {
                        toaster.error(format!("Couldn't update status: {e}"));
                    }
                }
            }
        });
    };

    let template_list = templates.ready().cloned().unwrap_or_default();
    let selected_template = snapshot.template_id.clone().unwrap_or_default();
    let selected_language = snapshot.language.clone().unwrap_or_default();

    rsx! {
        div { class: "flex h-full flex-col gap-4 overflow-y-auto p-4",
            section { class: "space-y-2", aria_label: "Status",
                h3 { class: "text-xs font-medium uppercase tracking-wide text-muted-foreground", "Status" }
                div { class: "flex flex-wrap gap-2",
                    for status in ConversationStatus::ALL {
                        Button {
                            key: "{status.id()}",
                            variant: if status == conversation.status { ButtonVariant::Secondary } else { ButtonVariant::Outline },
                            size: ButtonSize::Small,
                            disabled: status == conversation.status,
                            loading: status_busy(),
                            onclick: {
                                let set_status = set_status.clone();
                                move |_| set_status(status)
                            },
                            "{status_action_label(status)}"
                        }
                    }
                }
            }

            section { class: "flex flex-col gap-2", aria_label: "Reply",
                div { class: "flex flex-wrap items-center gap-2",
                    label { class: "sr-only", r#for: "reply-template", "Template" }
                    span { class: "text-muted-foreground", FileTextIcon {} }
                    select {
                        id: "reply-template",
                        class: "h-8 min-w-0 flex-1 rounded-md border border-input bg-background px-2 text-sm",
                        disabled: templates.is_loading() || template_list.is_empty(),
                        value: "{selected_template}",
                        onchange: {
                            let template_list = template_list.clone();
                            let draft = draft.clone();
                            move |e: FormEvent| {
                                let id = e.value();
                                if let Some(template) = template_list.iter().find(|t| t.id == id) {
                                    draft.dispatch(ComposerAction::ApplyTemplate {
                                        id: template.id.clone(),
                                        body: template.body.clone(),
                                    });
                                }
                            }
                        },
                        option { value: "", "Insert template…" }
                        for template in template_list.iter() {
                            option { key: "{template.id}", value: "{template.id}", "{template.title}" }
                        }
                    }
                }

                textarea {
                    class: "min-h-[120px] w-full resize-y rounded-md border border-input bg-background px-3 py-2 text-sm focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring",
                    placeholder: "Write a reply…",
                    aria_label: "Reply",
                    value: "{snapshot.draft}",
                    disabled: snapshot.sending,
                    oninput: {
                        let draft = draft.clone();
                        move |e: FormEvent| draft.dispatch(ComposerAction::Edit(e.value()))
                    },
                }

                if let Some(suggestion) = snapshot.suggestion.clone() {
                    div { class: "space-y-2 rounded-md border border-primary/30 bg-primary/5 p-3",
                        p { class: "text-xs font-medium text-primary", "Suggested reply" }
                        p { class: "whitespace-pre-wrap text-sm", "{suggestion}" }
                        div { class: "flex gap-2",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Small,
                                onclick: {
                                    let draft = draft.clone();
                                    move |_| draft.dispatch(ComposerAction::AcceptSuggestion)
                                },
                                "Use suggestion"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                onclick: {
                                    let draft = draft.clone();
                                    move |_| draft.dispatch(ComposerAction::DismissSuggestion)
                                },
                                "Dismiss"
                            }
                        }
                    }
                }

                if let Some(error) = snapshot.last_error.clone() {
                    p { class: "text-sm text-destructive", role: "alert", "{error}" }
                }

                div { class: "flex flex-wrap items-center gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        loading: snapshot.suggesting,
                        onclick: on_suggest,
                        if snapshot.suggesting {
                            LoaderIcon { class: "w-4 h-4 animate-spin" }
                        } else {
                            SparklesIcon {}
                        }
                        "Suggest"
                    }
                    label { class: "sr-only", r#for: "translate-language", "Translate to" }
                    select {
                        id: "translate-language",
                        class: "h-8 rounded-md border border-input bg-background px-2 text-sm",
                        value: "{selected_language}",
                        onchange: {
                            let draft = draft.clone();
                            move |e: FormEvent| {
                                let code = e.value();
                                let language = (!code.is_empty()).then_some(code);
                                draft.dispatch(ComposerAction::SetLanguage(language));
                            }
                        },
                        option { value: "", "Language" }
                        for language in TRANSLATION_LANGUAGES {
                            option { key: "{language.code}", value: "{language.code}", "{language.label}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        loading: snapshot.translating,
                        disabled: !snapshot.can_translate(),
                        onclick: on_translate,
                        if snapshot.translating {
                            LoaderIcon { class: "w-4 h-4 animate-spin" }
                        } else {
                            LanguagesIcon {}
                        }
                        "Translate"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        class: Some("ml-auto".to_string()),
                        loading: snapshot.sending,
                        disabled: !snapshot.can_send(),
                        onclick: on_send,
                        if snapshot.sending {
                            LoaderIcon { class: "w-4 h-4 animate-spin" }
                        } else {
                            SendIcon {}
                        }
                        "Send"
                    }
                }
            }
        }
    }
}

fn status_action_label(status: ConversationStatus) -> &'static str {
    match status {
        ConversationStatus::Open => "Reopen",
        ConversationStatus::Snoozed => "Snooze",
        ConversationStatus::Closed => "Close",
    }
}

/// Handle on one conversation's entry in the drafts signal
#[derive(Clone)]
struct Draft {
    drafts: Signal<ComposerDrafts>,
    conversation_id: String,
}

impl Draft {
    fn peek(&self) -> ComposerState {
        self.drafts.peek().get(&self.conversation_id)
    }

    /// Apply an action unless the owner of the drafts has been dropped
    fn dispatch(&self, action: ComposerAction) {
        let mut drafts = self.drafts;
        if let Ok(mut drafts) = drafts.try_write() {
            drafts.apply(&self.conversation_id, action);
        }
    }

    /// Await `call` with the busy flag for `task` raised for exactly its lifetime
    async fn guarded<T: 'static>(
        &self,
        task: ComposerTask,
        call: ActionFuture<T>,
    ) -> Result<T, String> {
        run_guarded(
            |busy| {
                let action = if busy {
                    ComposerAction::Started(task)
                } else {
                    ComposerAction::Settled(task)
                };
                self.dispatch(action);
            },
            call,
        )
        .await
    }

    fn report(&self, toaster: Option<Toaster>, task: ComposerTask, error: String) {
        tracing::warn!("Composer {:?} failed: {}", task, error);
        let message = match task {
            ComposerTask::Send => format!("Couldn't send reply: {error}"),
            ComposerTask::Suggest => format!("Couldn't suggest a reply: {error}"),
            ComposerTask::Translate => format!("Couldn't translate: {error}"),
        };
        self.dispatch(ComposerAction::Failed(task, message.clone()));
        if let Some(toaster) = toaster {
            toaster.error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_action_label(ConversationStatus::Closed), "Close");
        assert_eq!(status_action_label(ConversationStatus::Snoozed), "Snooze");
        assert_eq!(status_action_label(ConversationStatus::Open), "Reopen");
    }
}
