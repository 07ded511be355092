//! Backend collaborator
//!
//! JSON over HTTP when an API URL is configured, the in-memory demo store
//! otherwise. Every call returns [`ApiError`]; pages turn it into the plain
//! message their views show.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::demo_data::{self, DemoStore};
use helpdesk_common::{FilterCounts, InboxFilter};
use helpdesk_ui::display_types::{Conversation, ConversationStatus, Inbox, Message, ReplyTemplate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Backend is not configured: {0}")]
    NotConfigured(&'static str),
}

#[derive(Serialize)]
struct ReplyBody<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct StatusBody {
    status: ConversationStatus,
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    text: &'a str,
    target: &'a str,
}

#[derive(Deserialize)]
struct TextResponse {
    text: String,
}

enum Backend {
    Http {
        client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
        workspace_id: Option<String>,
        page_size: usize,
    },
    Demo(RefCell<DemoStore>),
}

/// Cheap to clone; clones share one backend
#[derive(Clone)]
pub struct HelpdeskApi {
    backend: Rc<Backend>,
}

impl PartialEq for HelpdeskApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl HelpdeskApi {
    pub fn new(config: &AppConfig) -> Self {
        let backend = match &config.api_url {
            Some(base_url) => Backend::Http {
                client: reqwest::Client::new(),
                base_url: base_url.clone(),
                api_key: config.api_key.clone(),
                workspace_id: config.workspace_id.clone(),
                page_size: config.page_size,
            },
            None => {
                tracing::info!("No API URL configured, serving demo data");
                Backend::Demo(RefCell::new(DemoStore::new(chrono::Utc::now())))
            }
        };
        Self {
            backend: Rc::new(backend),
        }
    }

    pub async fn fetch_inboxes(&self) -> Result<Vec<Inbox>, ApiError> {
        match &*self.backend {
            Backend::Demo(store) => Ok(store.borrow().inboxes()),
            Backend::Http { .. } => {
                let workspace = self.workspace_id()?;
                self.get(&format!("workspaces/{workspace}/inboxes"), &[])
                    .await
            }
        }
    }

    pub async fn fetch_filter_counts(&self, inbox_id: &str) -> Result<FilterCounts, ApiError> {
        match &*self.backend {
            Backend::Demo(store) => Ok(store.borrow().filter_counts(inbox_id)),
            Backend::Http { .. } => {
                let counts: HashMap<String, u32> =
                    self.get(&format!("inboxes/{inbox_id}/counts"), &[]).await?;
                Ok(FilterCounts::from_pairs(
                    counts.iter().map(|(id, count)| (id.as_str(), *count)),
                ))
            }
        }
    }

    pub async fn fetch_conversations(
        &self,
        inbox_id: &str,
        filter: InboxFilter,
    ) -> Result<Vec<Conversation>, ApiError> {
        match &*self.backend {
            Backend::Demo(store) => Ok(store.borrow().conversations(inbox_id, filter)),
            Backend::Http { page_size, .. } => {
                let limit = page_size.to_string();
                self.get(
                    &format!("inboxes/{inbox_id}/conversations"),
                    &[("filter", filter.id()), ("limit", &limit)],
                )
                .await
            }
        }
    }

    pub async fn fetch_messages(&self, conversation_id: &str) -> Result<Vec<Message>, ApiError> {
        match &*self.backend {
            Backend::Demo(store) => store
                .borrow()
                .messages(conversation_id)
                .ok_or_else(|| ApiError::NotFound(format!("Conversation {conversation_id}"))),
            Backend::Http { .. } => {
                self.get(&format!("conversations/{conversation_id}/messages"), &[])
                    .await
            }
        }
    }

    pub async fn fetch_templates(&self) -> Result<Vec<ReplyTemplate>, ApiError> {
        match &*self.backend {
            Backend::Demo(store) => Ok(store.borrow().templates()),
            Backend::Http { .. } => {
                let workspace = self.workspace_id()?;
                self.get(&format!("workspaces/{workspace}/templates"), &[])
                    .await
            }
        }
    }

    pub async fn send_reply(&self, conversation_id: &str, text: &str) -> Result<(), ApiError> {
        match &*self.backend {
            Backend::Demo(store) => store
                .borrow_mut()
                .send_reply(conversation_id, text, chrono::Utc::now())
                .ok_or_else(|| ApiError::NotFound(format!("Conversation {conversation_id}"))),
            Backend::Http { .. } => {
                self.send(
                    reqwest::Method::POST,
                    &format!("conversations/{conversation_id}/messages"),
                    &ReplyBody { body: text },
                )
                .await?;
                Ok(())
            }
        }?;
        tracing::info!("Reply sent to conversation {}", conversation_id);
        Ok(())
    }

    pub async fn set_status(
        &self,
        conversation_id: &str,
        status: ConversationStatus,
    ) -> Result<(), ApiError> {
        match &*self.backend {
            Backend::Demo(store) => store
                .borrow_mut()
                .set_status(conversation_id, status)
                .ok_or_else(|| ApiError::NotFound(format!("Conversation {conversation_id}"))),
            Backend::Http { .. } => {
                self.send(
                    reqwest::Method::PATCH,
                    &format!("conversations/{conversation_id}"),
                    &StatusBody { status },
                )
                .await?;
                Ok(())
            }
        }
    }

    pub async fn suggest_reply(&self, conversation_id: &str) -> Result<String, ApiError> {
        match &*self.backend {
            Backend::Demo(store) => store
                .borrow()
                .suggest_reply(conversation_id)
                .ok_or_else(|| ApiError::NotFound(format!("Conversation {conversation_id}"))),
            Backend::Http { .. } => {
                let response = self
                    .send(
                        reqwest::Method::POST,
                        &format!("conversations/{conversation_id}/suggestions"),
                        &serde_json::json!({}),
                    )
                    .await?;
                decode::<TextResponse>(response).await.map(|r| r.text)
            }
        }
    }

    pub async fn translate(&self, text: &str, language: &str) -> Result<String, ApiError> {
        match &*self.backend {
            Backend::Demo(_) => Ok(demo_data::translate(text, language)),
            Backend::Http { .. } => {
                let response = self
                    .send(
                        reqwest::Method::POST,
                        "translate",
                        &TranslateBody {
                            text,
                            target: language,
                        },
                    )
                    .await?;
                decode::<TextResponse>(response).await.map(|r| r.text)
            }
        }
    }

    fn workspace_id(&self) -> Result<&str, ApiError> {
        match &*self.backend {
            Backend::Http {
                workspace_id: Some(id),
                ..
            } => Ok(id),
            _ => Err(ApiError::NotConfigured("HELPDESK_WORKSPACE_ID is not set")),
        }
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Backend::Http {
            client,
            base_url,
            api_key,
            ..
        } = &*self.backend
        else {
            return Err(ApiError::NotConfigured("HELPDESK_API_URL is not set"));
        };
        let url = format!("{base_url}/{path}");
        tracing::debug!("{} {}", method, url);
        let mut builder = client.request(method, url);
        if let Some(key) = api_key {
            builder = builder.header("x-api-key", key);
        }
        Ok(builder)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::GET, path)?
            .query(query)
            .send()
            .await
            .map_err(ApiError::Network)?;
        decode(checked(response).await?).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .request(method, path)?
            .json(body)
            .send()
            .await
            .map_err(ApiError::Network)?;
        checked(response).await
    }
}

async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response.json().await.map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn demo() -> HelpdeskApi {
        HelpdeskApi::new(&AppConfig::default())
    }

    #[test]
    fn test_demo_backend_round_trip() {
        let api = demo();
        block_on(async {
            let inboxes = api.fetch_inboxes().await.unwrap();
            assert_eq!(inboxes[0].id, "support");

            let before = api.fetch_messages("c1").await.unwrap().len();
            api.send_reply("c1", "We're on it").await.unwrap();
            let after = api.fetch_messages("c1").await.unwrap();
            assert_eq!(after.len(), before + 1);
        });
    }

    #[test]
    fn test_clones_share_demo_state() {
        let api = demo();
        let other = api.clone();
        assert!(api == other);
        block_on(async {
            other.set_status("c1", ConversationStatus::Snoozed).await.unwrap();
            let snoozed = api
                .fetch_conversations("support", InboxFilter::Snoozed)
                .await
                .unwrap();
            assert!(snoozed.iter().any(|c| c.id == "c1"));
        });
    }

    #[test]
    fn test_unknown_conversation_is_not_found() {
        let err = block_on(demo().fetch_messages("missing")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Conversation missing not found");
    }

    #[test]
    fn test_http_backend_requires_workspace() {
        let config = AppConfig {
            api_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        };
        let err = block_on(HelpdeskApi::new(&config).fetch_inboxes()).unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured(_)));
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 503: maintenance");
    }
}
