//! Bundled fixtures served when no backend is configured
//!
//! Kept in memory for the session: replies and status changes made in the
//! demo show up in later fetches.

use chrono::{DateTime, Duration, Utc};
use helpdesk_common::{FilterCounts, InboxFilter};
use helpdesk_ui::display_types::{
    Channel, Conversation, ConversationStatus, Inbox, Message, MessageDirection, ReplyTemplate,
};

/// Agent the demo is signed in as
pub const DEMO_AGENT: &str = "Sam Rivera";

pub struct DemoStore {
    inboxes: Vec<Inbox>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    templates: Vec<ReplyTemplate>,
    next_message_id: u64,
}

impl DemoStore {
    pub fn new(now: DateTime<Utc>) -> Self {
        let conversations = demo_conversations(now);
        let messages = conversations
            .iter()
            .flat_map(|c| demo_messages(c, now))
            .collect::<Vec<_>>();
        Self {
            inboxes: vec![
                inbox("support", "Support"),
                inbox("billing", "Billing"),
                inbox("sales", "Sales"),
            ],
            next_message_id: messages.len() as u64 + 1,
            conversations,
            messages,
            templates: demo_templates(),
        }
    }

    pub fn inboxes(&self) -> Vec<Inbox> {
        self.inboxes.clone()
    }

    pub fn templates(&self) -> Vec<ReplyTemplate> {
        self.templates.clone()
    }

    pub fn conversations(&self, inbox_id: &str, filter: InboxFilter) -> Vec<Conversation> {
        let mut list: Vec<Conversation> = self
            .conversations
            .iter()
            .filter(|c| c.inbox_id == inbox_id && matches_filter(c, filter, DEMO_AGENT))
            .cloned()
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        list
    }

    pub fn filter_counts(&self, inbox_id: &str) -> FilterCounts {
        let mut counts = FilterCounts::default();
        for filter in InboxFilter::ALL {
            let count = self
                .conversations
                .iter()
                .filter(|c| c.inbox_id == inbox_id && matches_filter(c, filter, DEMO_AGENT))
                .count();
            counts.set(filter, count as u32);
        }
        counts
    }

    pub fn messages(&self, conversation_id: &str) -> Option<Vec<Message>> {
        self.conversation(conversation_id)?;
        let mut thread: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect();
        thread.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
        Some(thread)
    }

    /// Append an outbound reply. `None` if the conversation doesn't exist.
    pub fn send_reply(
        &mut self,
        conversation_id: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Option<()> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)?;
        conversation.updated_at = now;
        conversation.unread = false;
        conversation.preview = Some(text.to_string());
        if conversation.assignee.is_none() {
            conversation.assignee = Some(DEMO_AGENT.to_string());
        }

        let id = format!("m{}", self.next_message_id);
        self.next_message_id += 1;
        self.messages.push(Message {
            id,
            conversation_id: conversation_id.to_string(),
            author: DEMO_AGENT.to_string(),
            direction: MessageDirection::Outbound,
            body: text.to_string(),
            sent_at: now,
        });
        Some(())
    }

    pub fn set_status(&mut self, conversation_id: &str, status: ConversationStatus) -> Option<()> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)?;
        conversation.status = status;
        Some(())
    }

    /// Canned suggestion addressed to the contact
    pub fn suggest_reply(&self, conversation_id: &str) -> Option<String> {
        let conversation = self.conversation(conversation_id)?;
        let first_name = conversation
            .contact_name
            .split_whitespace()
            .next()
            .unwrap_or("there");
        Some(format!(
            "Hi {first_name},\n\nThanks for getting in touch about \"{}\". I've looked into this and will follow up shortly with next steps.\n\nBest,\n{DEMO_AGENT}",
            conversation.subject
        ))
    }

    fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == conversation_id)
    }
}

/// Demo stand-in for machine translation: tags the text with the target
pub fn translate(text: &str, language: &str) -> String {
    format!("[{}] {}", language.to_uppercase(), text)
}

/// Whether a conversation belongs under a filter, from `agent`'s point of view
pub fn matches_filter(conversation: &Conversation, filter: InboxFilter, agent: &str) -> bool {
    match filter {
        InboxFilter::All => true,
        InboxFilter::Unassigned => {
            conversation.assignee.is_none() && conversation.status != ConversationStatus::Closed
        }
        InboxFilter::Mine => conversation.assignee.as_deref() == Some(agent),
        InboxFilter::Open => conversation.status == ConversationStatus::Open,
        InboxFilter::Snoozed => conversation.status == ConversationStatus::Snoozed,
        InboxFilter::Closed => conversation.status == ConversationStatus::Closed,
    }
}

fn inbox(id: &str, name: &str) -> Inbox {
    Inbox {
        id: id.to_string(),
        name: name.to_string(),
    }
}

struct Seed {
    inbox: &'static str,
    subject: &'static str,
    body: &'static str,
    contact: &'static str,
    email: Option<&'static str>,
    channel: Channel,
    status: ConversationStatus,
    assignee: Option<&'static str>,
    minutes_ago: i64,
    unread: bool,
    tags: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        inbox: "support",
        subject: "Order arrived damaged",
        body: "The package was crushed and the mug inside is broken. Can I get a replacement?",
        contact: "Priya Natarajan",
        email: Some("priya@example.com"),
        channel: Channel::Email,
        status: ConversationStatus::Open,
        assignee: None,
        minutes_ago: 4,
        unread: true,
        tags: &["shipping", "replacement", "priority"],
    },
    Seed {
        inbox: "support",
        subject: "Can't log in after password reset",
        body: "I reset my password but the new one isn't accepted. I've tried three times.",
        contact: "Marco Bianchi",
        email: Some("marco@example.com"),
        channel: Channel::Chat,
        status: ConversationStatus::Open,
        assignee: Some(DEMO_AGENT),
        minutes_ago: 38,
        unread: false,
        tags: &["account"],
    },
    Seed {
        inbox: "support",
        subject: "Where is my order?",
        body: "Tracking hasn't updated in five days. Order #48213.",
        contact: "Lena Vogel",
        email: None,
        channel: Channel::Whatsapp,
        status: ConversationStatus::Snoozed,
        assignee: Some(DEMO_AGENT),
        minutes_ago: 60 * 5,
        unread: false,
        tags: &["shipping"],
    },
    Seed {
        inbox: "support",
        subject: "Feature request: dark mode",
        body: "Would love a dark theme for the dashboard, my eyes would thank you.",
        contact: "Jonas Berg",
        email: Some("jonas@example.com"),
        channel: Channel::Email,
        status: ConversationStatus::Closed,
        assignee: Some("Alex Kim"),
        minutes_ago: 60 * 30,
        unread: false,
        tags: &["feedback"],
    },
    Seed {
        inbox: "support",
        subject: "Reset code never arrives",
        body: "I'm not receiving the SMS verification code.",
        contact: "Ana Souza",
        email: None,
        channel: Channel::Sms,
        status: ConversationStatus::Open,
        assignee: None,
        minutes_ago: 60 * 2,
        unread: true,
        tags: &[],
    },
    Seed {
        inbox: "billing",
        subject: "Charged twice this month",
        body: "I see two charges of $29 on my card for March.",
        contact: "Tom Hughes",
        email: Some("tom@example.com"),
        channel: Channel::Email,
        status: ConversationStatus::Open,
        assignee: None,
        minutes_ago: 12,
        unread: true,
        tags: &["refund", "card"],
    },
    Seed {
        inbox: "billing",
        subject: "Invoice needs VAT number",
        body: "Please add our VAT number DE123456789 to the last invoice.",
        contact: "Greta Lindqvist",
        email: Some("greta@example.com"),
        channel: Channel::Email,
        status: ConversationStatus::Closed,
        assignee: Some(DEMO_AGENT),
        minutes_ago: 60 * 26,
        unread: false,
        tags: &["invoice"],
    },
    Seed {
        inbox: "sales",
        subject: "Volume pricing for 200 seats",
        body: "We're evaluating the product for our support team of 200. What discounts do you offer?",
        contact: "Daniel Okafor",
        email: Some("daniel@example.com"),
        channel: Channel::Chat,
        status: ConversationStatus::Open,
        assignee: None,
        minutes_ago: 90,
        unread: true,
        tags: &["enterprise", "lead"],
    },
];

fn demo_conversations(now: DateTime<Utc>) -> Vec<Conversation> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| Conversation {
            id: format!("c{}", i + 1),
            inbox_id: seed.inbox.to_string(),
            subject: seed.subject.to_string(),
            preview: Some(seed.body.to_string()),
            contact_name: seed.contact.to_string(),
            contact_email: seed.email.map(str::to_string),
            channel: seed.channel,
            status: seed.status,
            assignee: seed.assignee.map(str::to_string),
            updated_at: now - Duration::minutes(seed.minutes_ago),
            unread: seed.unread,
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

fn demo_messages(conversation: &Conversation, now: DateTime<Utc>) -> Vec<Message> {
    let opened = conversation.updated_at - Duration::minutes(45);
    let mut thread = vec![Message {
        id: format!("{}-1", conversation.id),
        conversation_id: conversation.id.clone(),
        author: conversation.contact_name.clone(),
        direction: MessageDirection::Inbound,
        body: conversation.preview.clone().unwrap_or_default(),
        sent_at: opened.min(now),
    }];
    if let Some(assignee) = &conversation.assignee {
        thread.push(Message {
            id: format!("{}-2", conversation.id),
            conversation_id: conversation.id.clone(),
            author: assignee.clone(),
            direction: MessageDirection::Note,
            body: "Checked the account, nothing unusual. Picking this up.".to_string(),
            sent_at: opened + Duration::minutes(20),
        });
    }
    thread
}

fn demo_templates() -> Vec<ReplyTemplate> {
    [
        ("greeting", "Greeting", "Hi there,\n\nThanks for reaching out! "),
        (
            "refund",
            "Refund issued",
            "I've issued a full refund. It should appear on your statement within 5-10 business days.",
        ),
        (
            "follow-up",
            "Follow-up",
            "Just checking in: did the steps above solve the problem for you?",
        ),
        (
            "closing",
            "Closing",
            "I'll close this conversation for now. Reply any time if you need anything else.",
        ),
    ]
    .into_iter()
    .map(|(id, title, body)| ReplyTemplate {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_conversations_newest_first() {
        let store = DemoStore::new(now());
        let list = store.conversations("support", InboxFilter::All);
        assert_eq!(list.len(), 5);
        assert!(list
            .windows(2)
            .all(|pair| pair[0].updated_at >= pair[1].updated_at));
    }

    #[test]
    fn test_counts_match_lists() {
        let store = DemoStore::new(now());
        let counts = store.filter_counts("support");
        for filter in InboxFilter::ALL {
            assert_eq!(
                counts.get(filter) as usize,
                store.conversations("support", filter).len(),
                "{filter:?}"
            );
        }
        assert_eq!(counts.get(InboxFilter::Unassigned), 2);
        assert_eq!(counts.get(InboxFilter::Mine), 2);
    }

    #[test]
    fn test_send_reply_appends_and_assigns() {
        let mut store = DemoStore::new(now());
        let later = now() + Duration::minutes(1);
        assert_eq!(store.send_reply("c1", "On its way!", later), Some(()));

        let thread = store.messages("c1").unwrap();
        let last = thread.last().unwrap();
        assert_eq!(last.body, "On its way!");
        assert_eq!(last.direction, MessageDirection::Outbound);

        let mine = store.conversations("support", InboxFilter::Mine);
        assert!(mine.iter().any(|c| c.id == "c1"));
    }

    #[test]
    fn test_unknown_conversation() {
        let mut store = DemoStore::new(now());
        assert_eq!(store.messages("nope"), None);
        assert_eq!(store.send_reply("nope", "hi", now()), None);
        assert_eq!(store.set_status("nope", ConversationStatus::Closed), None);
    }

    #[test]
    fn test_closing_moves_between_filters() {
        let mut store = DemoStore::new(now());
        store.set_status("c1", ConversationStatus::Closed);
        let closed = store.conversations("support", InboxFilter::Closed);
        assert!(closed.iter().any(|c| c.id == "c1"));
        let unassigned = store.conversations("support", InboxFilter::Unassigned);
        assert!(unassigned.iter().all(|c| c.id != "c1"));
    }

    #[test]
    fn test_suggestion_addresses_contact() {
        let store = DemoStore::new(now());
        let text = store.suggest_reply("c1").unwrap();
        assert!(text.starts_with("Hi Priya,"));
    }
}
