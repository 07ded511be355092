//! Reply composer state and in-flight bookkeeping
//!
//! The composer is driven by a reducer: the view dispatches
//! [`ComposerAction`]s and renders from [`ComposerState`]. Work that talks to
//! the backend (send, suggest, translate) is bracketed by a [`BusyGuard`] so
//! its busy flag drops on every exit path, including the future being dropped
//! before it completes.

use std::collections::HashMap;
use std::future::Future;

/// Long-running composer operations, each with its own busy flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComposerTask {
    Send,
    Suggest,
    Translate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
    pub template_id: Option<String>,
    /// Target language code for translation
    pub language: Option<String>,
    pub suggestion: Option<String>,
    pub sending: bool,
    pub suggesting: bool,
    pub translating: bool,
    pub last_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposerAction {
    Edit(String),
    ApplyTemplate { id: String, body: String },
    SetLanguage(Option<String>),
    Started(ComposerTask),
    Settled(ComposerTask),
    Failed(ComposerTask, String),
    Sent,
    Suggested(String),
    AcceptSuggestion,
    DismissSuggestion,
    Translated(String),
    Clear,
}

impl ComposerState {
    pub fn apply(&mut self, action: ComposerAction) {
        match action {
            ComposerAction::Edit(text) => {
                self.draft = text;
                self.last_error = None;
            }
            ComposerAction::ApplyTemplate { id, body } => {
                self.draft = body;
                self.template_id = Some(id);
            }
            ComposerAction::SetLanguage(language) => self.language = language,
            ComposerAction::Started(task) => {
                *self.flag_mut(task) = true;
                self.last_error = None;
            }
            ComposerAction::Settled(task) => *self.flag_mut(task) = false,
            ComposerAction::Failed(_, message) => self.last_error = Some(message),
            ComposerAction::Sent => {
                self.draft.clear();
                self.template_id = None;
                self.suggestion = None;
            }
            ComposerAction::Suggested(text) => self.suggestion = Some(text),
            ComposerAction::AcceptSuggestion => {
                if let Some(text) = self.suggestion.take() {
                    self.draft = text;
                }
            }
            ComposerAction::DismissSuggestion => self.suggestion = None,
            ComposerAction::Translated(text) => self.draft = text,
            ComposerAction::Clear => *self = ComposerState::default(),
        }
    }

    pub fn is_busy(&self, task: ComposerTask) -> bool {
        match task {
            ComposerTask::Send => self.sending,
            ComposerTask::Suggest => self.suggesting,
            ComposerTask::Translate => self.translating,
        }
    }

    pub fn can_send(&self) -> bool {
        !self.sending && !self.draft.trim().is_empty()
    }

    pub fn can_translate(&self) -> bool {
        !self.translating && self.language.is_some() && !self.draft.trim().is_empty()
    }

    fn flag_mut(&mut self, task: ComposerTask) -> &mut bool {
        match task {
            ComposerTask::Send => &mut self.sending,
            ComposerTask::Suggest => &mut self.suggesting,
            ComposerTask::Translate => &mut self.translating,
        }
    }
}

/// Composer state per conversation, owned above the composer so a draft
/// outlives the composer being unmounted (a tab switch, a closed sheet)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerDrafts {
    drafts: HashMap<String, ComposerState>,
}

impl ComposerDrafts {
    /// State for a conversation; untouched conversations start empty
    pub fn get(&self, conversation_id: &str) -> ComposerState {
        self.drafts
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn apply(&mut self, conversation_id: &str, action: ComposerAction) {
        let state = self.drafts.entry(conversation_id.to_string()).or_default();
        state.apply(action);
        if *state == ComposerState::default() {
            self.drafts.remove(conversation_id);
        }
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

/// Raises a busy flag on acquire and lowers it when dropped
pub struct BusyGuard<F: FnMut(bool)> {
    set: F,
}

impl<F: FnMut(bool)> BusyGuard<F> {
    pub fn acquire(mut set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: FnMut(bool)> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}

/// Await `task` with the busy flag raised for exactly its lifetime
pub async fn run_guarded<F, Fut, T, E>(set: F, task: Fut) -> Result<T, E>
where
    F: FnMut(bool),
    Fut: Future<Output = Result<T, E>>,
{
    let _guard = BusyGuard::acquire(set);
    task.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_flag_clears_after_rejection() {
        let busy = Cell::new(false);
        let result = block_on(run_guarded(
            |b| busy.set(b),
            async { Err::<(), _>("network down".to_string()) },
        ));
        assert_eq!(result, Err("network down".to_string()));
        assert!(!busy.get());
    }

    #[test]
    fn test_flag_raised_during_and_cleared_after_success() {
        let seen = RefCell::new(Vec::new());
        let result = block_on(run_guarded(
            |b| seen.borrow_mut().push(b),
            async { Ok::<_, String>(7) },
        ));
        assert_eq!(result, Ok(7));
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_flag_clears_when_future_is_dropped() {
        let busy = Cell::new(false);
        let pending = run_guarded(
            |b| busy.set(b),
            futures::future::pending::<Result<(), String>>(),
        );
        assert!(pending.now_or_never().is_none());
        assert!(!busy.get());
    }

    #[test]
    fn test_guard_drives_reducer() {
        let state = RefCell::new(ComposerState {
            draft: "Thanks for reaching out".to_string(),
            ..Default::default()
        });
        let result = block_on(run_guarded(
            |b| {
                let action = if b {
                    ComposerAction::Started(ComposerTask::Send)
                } else {
                    ComposerAction::Settled(ComposerTask::Send)
                };
                state.borrow_mut().apply(action);
            },
            async {
                assert!(state.borrow().sending);
                assert!(!state.borrow().can_send());
                Err::<(), _>("rejected".to_string())
            },
        ));
        if let Err(message) = result {
            state
                .borrow_mut()
                .apply(ComposerAction::Failed(ComposerTask::Send, message));
        }
        let state = state.into_inner();
        assert!(!state.sending);
        assert!(state.can_send());
        assert_eq!(state.last_error.as_deref(), Some("rejected"));
        assert_eq!(state.draft, "Thanks for reaching out");
    }

    #[test]
    fn test_send_disabled_for_blank_draft() {
        let mut state = ComposerState::default();
        assert!(!state.can_send());
        state.apply(ComposerAction::Edit("   ".to_string()));
        assert!(!state.can_send());
        state.apply(ComposerAction::Edit("Hi".to_string()));
        assert!(state.can_send());
    }

    #[test]
    fn test_sent_clears_draft() {
        let mut state = ComposerState::default();
        state.apply(ComposerAction::ApplyTemplate {
            id: "greeting".to_string(),
            body: "Hello!".to_string(),
        });
        assert_eq!(state.draft, "Hello!");
        state.apply(ComposerAction::Sent);
        assert!(state.draft.is_empty());
        assert_eq!(state.template_id, None);
    }

    #[test]
    fn test_accept_suggestion_replaces_draft() {
        let mut state = ComposerState::default();
        state.apply(ComposerAction::Edit("draft".to_string()));
        state.apply(ComposerAction::Suggested("suggested reply".to_string()));
        state.apply(ComposerAction::AcceptSuggestion);
        assert_eq!(state.draft, "suggested reply");
        assert_eq!(state.suggestion, None);
    }

    #[test]
    fn test_drafts_are_kept_per_conversation() {
        let mut drafts = ComposerDrafts::default();
        drafts.apply("c1", ComposerAction::Edit("Half-written reply".to_string()));
        drafts.apply("c1", ComposerAction::Suggested("Try this".to_string()));
        drafts.apply("c2", ComposerAction::Edit("Other".to_string()));

        let c1 = drafts.get("c1");
        assert_eq!(c1.draft, "Half-written reply");
        assert_eq!(c1.suggestion.as_deref(), Some("Try this"));
        assert_eq!(drafts.get("c2").draft, "Other");
        assert_eq!(drafts.get("c3"), ComposerState::default());
    }

    #[test]
    fn test_settled_draft_is_dropped() {
        let mut drafts = ComposerDrafts::default();
        drafts.apply("c1", ComposerAction::Edit("Hi".to_string()));
        drafts.apply("c1", ComposerAction::Started(ComposerTask::Send));
        drafts.apply("c1", ComposerAction::Sent);
        assert!(drafts.get("c1").sending);
        drafts.apply("c1", ComposerAction::Settled(ComposerTask::Send));
        assert!(drafts.is_empty());
    }

    #[test]
    fn test_translate_requires_language() {
        let mut state = ComposerState::default();
        state.apply(ComposerAction::Edit("Bonjour".to_string()));
        assert!(!state.can_translate());
        state.apply(ComposerAction::SetLanguage(Some("en".to_string())));
        assert!(state.can_translate());
    }
}
