//! Display types for UI components
//!
//! Read-only projections of backend rows, carrying only what the views show.
//! They deserialize straight from the backend's JSON so the web app and the
//! demo fixtures share one shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Workspace inbox
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Open,
    Snoozed,
    Closed,
}

impl ConversationStatus {
    pub const ALL: [ConversationStatus; 3] = [
        ConversationStatus::Open,
        ConversationStatus::Snoozed,
        ConversationStatus::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConversationStatus::Open => "Open",
            ConversationStatus::Snoozed => "Snoozed",
            ConversationStatus::Closed => "Closed",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ConversationStatus::Open => "open",
            ConversationStatus::Snoozed => "snoozed",
            ConversationStatus::Closed => "closed",
        }
    }
}

/// Channel a conversation arrived on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Chat,
    Sms,
    Whatsapp,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Chat => "Chat",
            Channel::Sms => "SMS",
            Channel::Whatsapp => "WhatsApp",
        }
    }
}

/// Conversation summary for list rows and thread headers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub inbox_id: String,
    pub subject: String,
    #[serde(default)]
    pub preview: Option<String>,
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub channel: Channel,
    pub status: ConversationStatus,
    #[serde(default)]
    pub assignee: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageDirection {
    Inbound,
    Outbound,
    /// Internal note, never sent to the contact
    Note,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub author: String,
    pub direction: MessageDirection,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Canned reply
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTemplate {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Translation target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

pub const TRANSLATION_LANGUAGES: &[Language] = &[
    Language {
        code: "en",
        label: "English",
    },
    Language {
        code: "es",
        label: "Spanish",
    },
    Language {
        code: "fr",
        label: "French",
    },
    Language {
        code: "de",
        label: "German",
    },
    Language {
        code: "pt",
        label: "Portuguese",
    },
];

/// Result of an external query as seen by a view
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Clone> Loadable<T> {
    /// Map a `use_resource` read into a loadable
    pub fn from_resource(value: Option<&Result<T, String>>) -> Self {
        match value {
            None => Loadable::Loading,
            Some(Ok(value)) => Loadable::Ready(value.clone()),
            Some(Err(e)) => Loadable::Failed(e.clone()),
        }
    }
}

/// Future returned by an [`AsyncAction`]
pub type ActionFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>>>>;

/// Wrapper for async callbacks into the backend (send, suggest, translate).
/// PartialEq returns false to ensure re-renders when the closure might have changed.
pub struct AsyncAction<A, T>(pub Rc<dyn Fn(A) -> ActionFuture<T>>);

impl<A, T> AsyncAction<A, T> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        A: 'static,
        T: 'static,
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        Self(Rc::new(move |arg| -> ActionFuture<T> { Box::pin(f(arg)) }))
    }

    pub fn call(&self, arg: A) -> ActionFuture<T> {
        (self.0)(arg)
    }
}

impl<A, T> Clone for AsyncAction<A, T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A, T> PartialEq for AsyncAction<A, T> {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}
