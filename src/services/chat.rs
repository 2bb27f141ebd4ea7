use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};
use crate::models::chat::{Message, Sender};
use crate::models::mood::MoodLevel;
use crate::seed;

/// Where simulated assistant replies come from.
pub trait ResponseSource: Send + Sync {
    fn next_response(&self) -> String;
}

/// Uniform random pick from a fixed list; ignores what the user said.
pub struct CannedResponses {
    responses: Vec<String>,
}

impl CannedResponses {
    pub fn new(responses: Vec<String>) -> Self {
        Self { responses }
    }
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self::new(seed::CANNED_RESPONSES.iter().map(|r| r.to_string()).collect())
    }
}

impl ResponseSource for CannedResponses {
    fn next_response(&self) -> String {
        self.responses
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

/// Append-only chat transcript with a delayed, simulated assistant.
#[derive(Clone)]
pub struct ChatSession {
    messages: Arc<RwLock<Vec<Message>>>,
    pending_replies: Arc<AtomicUsize>,
    selected_mood: Arc<RwLock<Option<MoodLevel>>>,
    responses: Arc<dyn ResponseSource>,
    reply_delay: Duration,
    events: Option<broadcast::Sender<String>>,
}

impl ChatSession {
    pub fn new(
        responses: Arc<dyn ResponseSource>,
        reply_delay: Duration,
        events: Option<broadcast::Sender<String>>,
    ) -> Self {
        Self {
            messages: Arc::new(RwLock::new(vec![Message::new(
                Sender::Assistant,
                seed::GREETING,
            )])),
            pending_replies: Arc::new(AtomicUsize::new(0)),
            selected_mood: Arc::new(RwLock::new(None)),
            responses,
            reply_delay,
            events,
        }
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    pub async fn selected_mood(&self) -> Option<MoodLevel> {
        *self.selected_mood.read().await
    }

    /// True while at least one assistant reply is still waiting on its timer.
    pub fn is_typing(&self) -> bool {
        self.pending_replies.load(Ordering::SeqCst) > 0
    }

    /// Append the user's message and schedule exactly one assistant reply.
    ///
    /// Blank input with no mood appends nothing. Blank input with a mood is a
    /// check-in and is sent as "I'm feeling <mood> today". The reply timer
    /// cannot be cancelled and there is no in-flight guard: rapid sends each
    /// get their own reply, in no particular order.
    pub async fn send(
        &self,
        content: &str,
        mood: Option<MoodLevel>,
    ) -> AppResult<(Message, JoinHandle<()>)> {
        let content = match (content.trim(), mood) {
            ("", Some(mood)) => check_in_text(mood),
            ("", None) => {
                return Err(AppError::Validation("Message content is required".into()));
            }
            (text, _) => text.to_string(),
        };

        if let Some(mood) = mood {
            *self.selected_mood.write().await = Some(mood);
            tracing::debug!(mood = mood.value(), "Mood selected in chat");
        }

        let user_message = Message::new(Sender::User, content).with_mood(mood);
        self.append(user_message.clone()).await;
        tracing::debug!(message_id = %user_message.id, "User message appended");

        self.pending_replies.fetch_add(1, Ordering::SeqCst);
        let session = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(session.reply_delay).await;
            let reply = Message::new(Sender::Assistant, session.responses.next_response());
            let reply_id = reply.id;
            session.append(reply).await;
            session.pending_replies.fetch_sub(1, Ordering::SeqCst);
            tracing::debug!(
                message_id = %reply_id,
                delay_ms = session.reply_delay.as_millis() as u64,
                "Assistant reply delivered"
            );
        });

        Ok((user_message, handle))
    }

    async fn append(&self, message: Message) {
        self.messages.write().await.push(message.clone());

        if let Some(tx) = self.events.as_ref() {
            let event = serde_json::json!({
                "type": "chat_message",
                "message": message,
            });
            // No subscribers is fine
            let _ = tx.send(event.to_string());
        }
    }
}

pub fn check_in_text(mood: MoodLevel) -> String {
    format!("I'm feeling {} today", mood.label().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResponse(&'static str);

    impl ResponseSource for FixedResponse {
        fn next_response(&self) -> String {
            self.0.to_string()
        }
    }

    fn session(delay: Duration) -> ChatSession {
        ChatSession::new(Arc::new(FixedResponse("fixed reply")), delay, None)
    }

    #[tokio::test]
    async fn test_starts_with_greeting() {
        let chat = session(Duration::ZERO);
        let messages = chat.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Assistant);
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn test_send_appends_user_then_one_reply() {
        let chat = session(Duration::ZERO);
        let (sent, handle) = chat.send("  I'm feeling stressed  ", None).await.unwrap();
        assert_eq!(sent.content, "I'm feeling stressed");
        assert_eq!(sent.sender, Sender::User);

        handle.await.unwrap();
        let messages = chat.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].id, sent.id);
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].content, "fixed reply");
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn test_reply_waits_for_delay() {
        let chat = session(Duration::from_secs(3600));
        let (_, handle) = chat.send("hello", None).await.unwrap();

        assert_eq!(chat.messages().await.len(), 2);
        assert!(chat.is_typing());
        handle.abort();
    }

    #[tokio::test]
    async fn test_blank_message_appends_nothing() {
        let chat = session(Duration::ZERO);
        for blank in ["", "   ", "\n\t"] {
            let result = chat.send(blank, None).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
        assert_eq!(chat.messages().await.len(), 1);
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn test_overlapping_sends_each_get_a_reply() {
        let chat = session(Duration::from_millis(5));
        let (_, first) = chat.send("one", None).await.unwrap();
        let (_, second) = chat.send("two", None).await.unwrap();
        first.await.unwrap();
        second.await.unwrap();

        let messages = chat.messages().await;
        assert_eq!(messages.len(), 5);
        let replies = messages
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .count();
        assert_eq!(replies, 3);
    }

    #[tokio::test]
    async fn test_events_broadcast_for_each_message() {
        let (tx, mut rx) = broadcast::channel(16);
        let chat = ChatSession::new(Arc::new(FixedResponse("ok")), Duration::ZERO, Some(tx));
        let (_, handle) = chat.send("hi", None).await.unwrap();
        handle.await.unwrap();

        let first: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(first["type"], "chat_message");
        assert_eq!(first["message"]["sender"], "user");
        let second: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(second["message"]["sender"], "assistant");
    }

    #[tokio::test]
    async fn test_mood_check_in_composes_message() {
        let chat = session(Duration::ZERO);
        assert!(chat.selected_mood().await.is_none());

        let mood = MoodLevel::new(2).unwrap();
        let (sent, handle) = chat.send("  ", Some(mood)).await.unwrap();
        handle.await.unwrap();

        assert_eq!(sent.content, "I'm feeling sad today");
        assert_eq!(sent.mood, Some(mood));
        assert_eq!(chat.selected_mood().await, Some(mood));
        assert_eq!(chat.messages().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mood_with_text_keeps_text() {
        let chat = session(Duration::ZERO);
        let mood = MoodLevel::new(5).unwrap();
        let (sent, handle) = chat.send("Great news today", Some(mood)).await.unwrap();
        handle.await.unwrap();

        assert_eq!(sent.content, "Great news today");
        assert_eq!(sent.mood, Some(mood));

        // A later plain message keeps the last selection
        let (plain, handle) = chat.send("thanks", None).await.unwrap();
        handle.await.unwrap();
        assert!(plain.mood.is_none());
        assert_eq!(chat.selected_mood().await, Some(mood));
    }

    #[test]
    fn test_check_in_text_uses_label() {
        assert_eq!(check_in_text(MoodLevel::new(5).unwrap()), "I'm feeling very happy today");
        assert_eq!(check_in_text(MoodLevel::new(3).unwrap()), "I'm feeling neutral today");
    }

    #[test]
    fn test_canned_responses_pick_from_list() {
        let source = CannedResponses::default();
        for _ in 0..20 {
            let reply = source.next_response();
            assert!(seed::CANNED_RESPONSES.contains(&reply.as_str()));
        }
    }
}
