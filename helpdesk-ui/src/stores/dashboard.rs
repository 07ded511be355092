//! Conversation dashboard selection state

use crate::display_types::{Conversation, ConversationStatus};
use dioxus::prelude::*;
use helpdesk_common::InboxFilter;

/// Everything the dashboard screen selects. Owned by the screen, handed to
/// the shell and panes one level down.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Selected workspace inbox
    pub inbox_id: Option<String>,
    /// Selected conversation filter
    pub filter: InboxFilter,
    /// Conversation open in the thread viewer, as of when it was opened or
    /// last seen in a list. Kept even after it leaves the filtered list.
    pub conversation: Option<Conversation>,
    /// List view (false) or detail view (true)
    pub is_detail: bool,
}

impl DashboardState {
    /// Open a conversation in the detail view
    pub fn open_conversation(&mut self, conversation: Conversation) {
        self.conversation = Some(conversation);
        self.is_detail = true;
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation.as_ref().map(|c| c.id.as_str())
    }

    /// The open conversation, taking the fresher copy from `list` when it is
    /// there. A conversation that no longer matches the filter stays open.
    pub fn current_conversation(&self, list: Option<&[Conversation]>) -> Option<Conversation> {
        let open = self.conversation.as_ref()?;
        let fresh = list.and_then(|list| list.iter().find(|c| c.id == open.id));
        Some(fresh.unwrap_or(open).clone())
    }

    /// Record a status change made from the detail view
    pub fn set_open_status(&mut self, status: ConversationStatus) {
        if let Some(conversation) = self.conversation.as_mut() {
            conversation.status = status;
        }
    }

    /// Return to the list, keeping the selection highlighted
    pub fn back_to_list(&mut self) {
        self.is_detail = false;
    }

    /// Switch inbox; the open conversation belongs to the old one
    pub fn select_inbox(&mut self, inbox_id: String) {
        if self.inbox_id.as_deref() != Some(inbox_id.as_str()) {
            self.inbox_id = Some(inbox_id);
            self.conversation = None;
            self.is_detail = false;
        }
    }

    pub fn select_filter(&mut self, filter: InboxFilter) {
        self.filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::Channel;
    use chrono::{TimeZone, Utc};

    fn conversation(id: &str, assignee: Option<&str>) -> Conversation {
        Conversation {
            id: id.to_string(),
            inbox_id: "support".to_string(),
            subject: format!("Subject {id}"),
            preview: None,
            contact_name: "Ada".to_string(),
            contact_email: None,
            channel: Channel::Email,
            status: ConversationStatus::Open,
            assignee: assignee.map(str::to_string),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
            unread: false,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_open_and_back() {
        let mut state = DashboardState::default();
        state.open_conversation(conversation("c1", None));
        assert!(state.is_detail);
        state.back_to_list();
        assert!(!state.is_detail);
        assert_eq!(state.conversation_id(), Some("c1"));
    }

    #[test]
    fn test_open_conversation_survives_leaving_filter() {
        let mut state = DashboardState::default();
        state.open_conversation(conversation("c1", None));
        // Replying assigns it, so the Unassigned list no longer has it
        let unassigned = vec![conversation("c2", None)];
        let current = state.current_conversation(Some(unassigned.as_slice()));
        assert_eq!(current.map(|c| c.id), Some("c1".to_string()));
        assert!(state.is_detail);
    }

    #[test]
    fn test_open_conversation_prefers_fresh_copy() {
        let mut state = DashboardState::default();
        state.open_conversation(conversation("c1", None));
        let list = vec![conversation("c1", Some("Sam Rivera"))];
        let current = state.current_conversation(Some(list.as_slice()));
        assert_eq!(
            current.and_then(|c| c.assignee).as_deref(),
            Some("Sam Rivera")
        );
        assert!(state.current_conversation(None).is_some());
    }

    #[test]
    fn test_status_change_updates_open_conversation() {
        let mut state = DashboardState::default();
        state.set_open_status(ConversationStatus::Closed);
        assert_eq!(state.conversation, None);
        state.open_conversation(conversation("c1", None));
        state.set_open_status(ConversationStatus::Closed);
        let current = state.current_conversation(Some(&[][..]));
        assert_eq!(current.map(|c| c.status), Some(ConversationStatus::Closed));
    }

    #[test]
    fn test_switching_inbox_clears_selection() {
        let mut state = DashboardState::default();
        state.select_inbox("support".to_string());
        state.open_conversation(conversation("c1", None));
        state.select_inbox("support".to_string());
        assert_eq!(state.conversation_id(), Some("c1"));
        state.select_inbox("billing".to_string());
        assert_eq!(state.conversation, None);
        assert!(!state.is_detail);
    }
}
