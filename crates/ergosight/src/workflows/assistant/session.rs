use super::dispatcher::{AssistantReply, Dispatcher};
use crate::workflows::pacing::Pacer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage<P> {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("query must not be empty")]
    EmptyQuery,
}

/// One chat widget's conversation: starts with a greeting and only grows
/// until [`ChatSession::reset`].
pub struct ChatSession<P> {
    dispatcher: Dispatcher<P>,
    greeting: &'static str,
    delay: Duration,
    messages: Vec<ChatMessage<P>>,
    next_id: u64,
}

impl<P: Clone> ChatSession<P> {
    pub fn new(dispatcher: Dispatcher<P>, greeting: &'static str, delay: Duration) -> Self {
        let mut session = Self {
            dispatcher,
            greeting,
            delay,
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(Role::Assistant, greeting.to_string(), None);
        session
    }

    pub fn messages(&self) -> &[ChatMessage<P>] {
        &self.messages
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Appends the user's text, waits out the thinking delay, then appends the
    /// dispatched reply. Returns the reply message.
    pub fn submit<T>(&mut self, text: &str, pacer: &T) -> Result<&ChatMessage<P>, ChatError>
    where
        T: Pacer + ?Sized,
    {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyQuery);
        }

        self.push(Role::User, text.to_string(), None);
        pacer.pause(self.delay);

        let AssistantReply {
            intent,
            content,
            payload,
        } = self.dispatcher.dispatch(text);
        debug!(intent, messages = self.messages.len() + 1, "assistant replied");

        Ok(self.push(Role::Assistant, content, payload))
    }

    /// Widget closed and reopened.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        self.push(Role::Assistant, self.greeting.to_string(), None);
    }

    fn push(&mut self, role: Role, content: String, payload: Option<P>) -> &ChatMessage<P> {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: Utc::now(),
            payload,
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assistant::copilot;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPacer {
        pauses: RefCell<Vec<Duration>>,
    }

    impl Pacer for RecordingPacer {
        fn pause(&self, duration: Duration) {
            self.pauses.borrow_mut().push(duration);
        }
    }

    fn session() -> ChatSession<copilot::CopilotVisual> {
        ChatSession::new(
            copilot::dispatcher(),
            copilot::GREETING,
            Duration::from_millis(1500),
        )
    }

    #[test]
    fn starts_with_greeting() {
        let session = session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, copilot::GREETING);
    }

    #[test]
    fn submit_appends_user_and_reply_after_delay() {
        let mut session = session();
        let pacer = RecordingPacer::default();

        let reply = session
            .submit("Which vehicles are worst for seniors?", &pacer)
            .expect("reply");
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.payload.is_some());

        assert_eq!(pacer.pauses.into_inner(), vec![Duration::from_millis(1500)]);
        let ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(session.messages()[1].role, Role::User);
    }

    #[test]
    fn blank_input_is_rejected_without_waiting() {
        let mut session = session();
        let pacer = RecordingPacer::default();
        assert_eq!(session.submit("   \n", &pacer).err(), Some(ChatError::EmptyQuery));
        assert!(pacer.pauses.borrow().is_empty());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn reset_returns_to_single_greeting() {
        let mut session = session();
        let pacer = RecordingPacer::default();
        session.submit("compare them", &pacer).expect("reply");
        session.reset();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, 1);
    }
}
