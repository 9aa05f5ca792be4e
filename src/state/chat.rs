//! Chat Session
//!
//! Ordered message history for the assistant widget. The plain [`ChatLog`]
//! holds the messages and the send/stream/retry rules; [`ChatStore`] wraps
//! it in a signal and runs the actual requests.
//!
//! While a response streams in, `message`/`image` events replace the
//! content of a single evolving assistant message in place, so the UI shows
//! incremental growth without appending a message per chunk.

use leptos::*;

use crate::api;
use crate::config;
use crate::stream::{self, ChatEvent};

const GREETING: &str = "Hello! I'm CrypGod, your AI crypto assistant. I can help you with \
                        cryptocurrency analysis, market trends, and trading strategies. How can \
                        I assist you today?";
const PLACEHOLDER: &str = "CrypGod is thinking...";
pub(crate) const FAILURE_FALLBACK: &str = "Failed to get response from the agent.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One rendered chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    pub image_url: Option<String>,
    /// Set when the turn failed; the message then carries `retry_text`
    pub failed: bool,
    /// Original user text, kept on a failed assistant message for retry
    pub retry_text: Option<String>,
}

/// Transient activity shown inside the streaming assistant bubble.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamStatus {
    Thinking { content: String },
    ToolUsage { content: String, details: Option<String> },
}

/// Message history plus the in-flight bookkeeping for one chat session.
#[derive(Clone, Debug)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
    pub status: Option<StreamStatus>,
    pub in_flight: bool,
    /// Server-issued continuity token, attached to subsequent requests
    pub session_id: Option<String>,
    next_id: u64,
    pending_text: Option<String>,
    got_content: bool,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            status: None,
            in_flight: false,
            session_id: None,
            next_id: 1,
            pending_text: None,
            got_content: false,
        };
        let id = log.alloc_id();
        log.messages.push(ChatMessage {
            id,
            role: Role::Assistant,
            content: GREETING.to_string(),
            timestamp: timestamp_now(),
            image_url: None,
            failed: false,
            retry_text: None,
        });
        log
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn message_mut(&mut self, id: u64) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().find(|message| message.id == id)
    }

    /// Start a turn: append the user message and an assistant placeholder.
    /// Returns the placeholder's id, or `None` when a request is already in
    /// flight or the text is blank — in both cases the log is untouched.
    pub fn begin_send(&mut self, text: &str) -> Option<u64> {
        if self.in_flight || text.trim().is_empty() {
            return None;
        }

        let user_id = self.alloc_id();
        self.messages.push(ChatMessage {
            id: user_id,
            role: Role::User,
            content: text.to_string(),
            timestamp: timestamp_now(),
            image_url: None,
            failed: false,
            retry_text: None,
        });

        let assistant_id = self.alloc_id();
        self.messages.push(ChatMessage {
            id: assistant_id,
            role: Role::Assistant,
            content: PLACEHOLDER.to_string(),
            timestamp: timestamp_now(),
            image_url: None,
            failed: false,
            retry_text: None,
        });

        self.in_flight = true;
        self.got_content = false;
        self.pending_text = Some(text.to_string());
        self.status = Some(StreamStatus::Thinking {
            content: "Analyzing your request...".to_string(),
        });

        Some(assistant_id)
    }

    /// Replace the streaming assistant message's content in place.
    pub fn set_content(&mut self, id: u64, content: &str) {
        let Some(message) = self.message_mut(id) else { return };
        if message.failed {
            return;
        }
        message.content = content.to_string();
        self.got_content = true;
        self.status = None;
    }

    /// Fold one decoded stream event into the log.
    pub fn apply_event(&mut self, id: u64, event: &ChatEvent) {
        match event {
            ChatEvent::Thinking { content, .. } => {
                self.status = Some(StreamStatus::Thinking { content: content.clone() });
            }
            ChatEvent::ToolUsage { content, details } => {
                self.status = Some(StreamStatus::ToolUsage {
                    content: content.clone(),
                    details: details.clone(),
                });
            }
            ChatEvent::Message { content, session_id } => {
                if let Some(session) = session_id {
                    self.session_id = Some(session.clone());
                }
                self.set_content(id, content);
            }
            ChatEvent::Image { content, image_url } => {
                self.set_content(id, content);
                if let Some(message) = self.message_mut(id) {
                    if !message.failed {
                        message.image_url = image_url.clone();
                    }
                }
            }
            ChatEvent::Error { content } => {
                self.fail(id, if content.is_empty() { FAILURE_FALLBACK } else { content });
            }
            ChatEvent::Complete { session_id, .. } => {
                if let Some(session) = session_id {
                    self.session_id = Some(session.clone());
                }
            }
        }
    }

    /// Mark the turn failed, keeping the original user text for retry.
    pub fn fail(&mut self, id: u64, message: &str) {
        let retry_text = self.pending_text.take();
        if let Some(entry) = self.message_mut(id) {
            entry.failed = true;
            entry.content = message.to_string();
            entry.retry_text = retry_text;
        }
        self.in_flight = false;
        self.status = None;
    }

    /// Close the turn after the stream ended. A stream that produced no
    /// content at all leaves the placeholder, so that counts as a failure.
    pub fn finish(&mut self, id: u64) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        self.status = None;
        if !self.got_content {
            let retry_text = self.pending_text.take();
            if let Some(entry) = self.message_mut(id) {
                entry.failed = true;
                entry.content = FAILURE_FALLBACK.to_string();
                entry.retry_text = retry_text;
            }
        }
        self.pending_text = None;
    }

    /// Remove a failed message and hand back its original text for
    /// resubmission. `None` while a request is in flight or for messages
    /// that did not fail.
    pub fn take_retry(&mut self, id: u64) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let index = self.messages.iter().position(|m| m.id == id && m.failed)?;
        self.messages.remove(index).retry_text
    }
}

fn timestamp_now() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Reactive chat store.
#[derive(Clone)]
pub struct ChatStore {
    pub log: RwSignal<ChatLog>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self { log: create_rw_signal(ChatLog::new()) }
    }

    /// Submit a user message. No-op while a previous request is in flight.
    pub fn send(&self, text: String) {
        let mut ticket = None;
        self.log.update(|log| ticket = log.begin_send(&text));
        let Some(assistant_id) = ticket else { return };

        let store = self.clone();
        spawn_local(async move {
            let session = store.log.with_untracked(|log| log.session_id.clone());

            if config::streaming_enabled() {
                stream::stream_chat(&config::api_base(), &text, session, |event| {
                    store.log.update(|log| log.apply_event(assistant_id, &event));
                })
                .await;
            } else {
                match api::backend::send_chat(&config::api_base(), &text, session).await {
                    Ok(response) => {
                        // Animate the complete response word by word
                        let mut shown = String::new();
                        stream::text::stream_text(&response, |token| {
                            shown.push_str(token);
                            store
                                .log
                                .update(|log| log.set_content(assistant_id, shown.trim_end()));
                        })
                        .await;
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Chat request failed: {}", e).into());
                        store.log.update(|log| log.fail(assistant_id, FAILURE_FALLBACK));
                    }
                }
            }

            store.log.update(|log| log.finish(assistant_id));
        });
    }

    /// Resubmit the original text behind a failed message.
    pub fn retry(&self, message_id: u64) {
        let mut original = None;
        self.log.update(|log| original = log.take_retry(message_id));
        if let Some(text) = original {
            self.send(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_event(content: &str) -> ChatEvent {
        ChatEvent::Message { content: content.to_string(), session_id: None }
    }

    #[test]
    fn new_log_greets() {
        let log = ChatLog::new();
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].role, Role::Assistant);
        assert!(!log.in_flight);
    }

    #[test]
    fn begin_send_appends_user_and_placeholder() {
        let mut log = ChatLog::new();
        let assistant_id = log.begin_send("what is BTC doing?").unwrap();

        assert_eq!(log.messages.len(), 3);
        assert_eq!(log.messages[1].role, Role::User);
        assert_eq!(log.messages[1].content, "what is BTC doing?");
        assert_eq!(log.messages[2].id, assistant_id);
        assert_eq!(log.messages[2].content, PLACEHOLDER);
        assert!(log.in_flight);
    }

    #[test]
    fn send_while_in_flight_is_a_no_op() {
        let mut log = ChatLog::new();
        log.begin_send("first").unwrap();
        let len = log.messages.len();

        assert_eq!(log.begin_send("second"), None);
        assert_eq!(log.messages.len(), len);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut log = ChatLog::new();
        assert_eq!(log.begin_send("   "), None);
        assert_eq!(log.messages.len(), 1);
    }

    #[test]
    fn message_ids_are_unique_and_monotonic() {
        let mut log = ChatLog::new();
        let first = log.begin_send("one").unwrap();
        log.finish(first);
        let second = log.begin_send("two").unwrap();

        let mut ids: Vec<u64> = log.messages.iter().map(|m| m.id).collect();
        let deduped = ids.clone();
        ids.dedup();
        assert_eq!(ids, deduped);
        assert!(second > first);
    }

    #[test]
    fn message_events_replace_content_in_place() {
        let mut log = ChatLog::new();
        let id = log.begin_send("hi").unwrap();

        log.apply_event(id, &message_event("Bit"));
        log.apply_event(id, &message_event("Bitcoin is"));
        log.apply_event(id, &message_event("Bitcoin is up."));
        log.finish(id);

        assert_eq!(log.messages.len(), 3);
        assert_eq!(log.messages[2].content, "Bitcoin is up.");
        assert!(!log.messages[2].failed);
    }

    #[test]
    fn image_events_attach_the_image_url() {
        let mut log = ChatLog::new();
        let id = log.begin_send("draw btc").unwrap();

        log.apply_event(
            id,
            &ChatEvent::Image {
                content: "Here you go".to_string(),
                image_url: Some("https://example.com/btc.png".to_string()),
            },
        );
        log.finish(id);

        assert_eq!(log.messages[2].image_url.as_deref(), Some("https://example.com/btc.png"));
    }

    #[test]
    fn session_token_is_captured_from_events() {
        let mut log = ChatLog::new();
        let id = log.begin_send("hello").unwrap();

        log.apply_event(
            id,
            &ChatEvent::Message { content: "hi".to_string(), session_id: Some("s-7".to_string()) },
        );
        log.apply_event(id, &ChatEvent::Complete { content: None, session_id: None });
        log.finish(id);

        assert_eq!(log.session_id.as_deref(), Some("s-7"));
    }

    #[test]
    fn error_event_marks_the_turn_failed_and_keeps_retry_text() {
        let mut log = ChatLog::new();
        let id = log.begin_send("original question").unwrap();

        log.apply_event(id, &ChatEvent::Error { content: "backend exploded".to_string() });

        let failed = &log.messages[2];
        assert!(failed.failed);
        assert_eq!(failed.content, "backend exploded");
        assert_eq!(failed.retry_text.as_deref(), Some("original question"));
        assert!(!log.in_flight);
    }

    #[test]
    fn events_after_failure_are_ignored() {
        let mut log = ChatLog::new();
        let id = log.begin_send("q").unwrap();

        log.apply_event(id, &ChatEvent::Error { content: "boom".to_string() });
        log.apply_event(id, &message_event("late content"));

        assert_eq!(log.messages[2].content, "boom");
    }

    #[test]
    fn empty_stream_fails_the_placeholder() {
        let mut log = ChatLog::new();
        let id = log.begin_send("q").unwrap();

        log.finish(id);

        assert!(log.messages[2].failed);
        assert_eq!(log.messages[2].retry_text.as_deref(), Some("q"));
    }

    #[test]
    fn take_retry_removes_the_failed_message_and_returns_the_text() {
        let mut log = ChatLog::new();
        let id = log.begin_send("try me").unwrap();
        log.apply_event(id, &ChatEvent::Error { content: "nope".to_string() });

        let len = log.messages.len();
        assert_eq!(log.take_retry(id).as_deref(), Some("try me"));
        assert_eq!(log.messages.len(), len - 1);

        // A healthy message cannot be retried
        let healthy_id = log.messages[0].id;
        assert_eq!(log.take_retry(healthy_id), None);
    }
}
