//! Send flow - one request/response round trip per trigger

use crate::application::bindings::Trigger;
use crate::application::input::InputField;
use crate::application::panel::ChatPanel;
use crate::domain::entities::Message;
use crate::domain::traits::{ChatBackend, Renderer};

/// Reply rendered when the round trip fails for any reason
pub const FALLBACK_REPLY: &str = "Sorry, the server is not responding.";

/// Chat session context, built once at startup. Owning the panel, the input
/// field and the backend here (instead of reaching for globals) means a
/// missing collaborator is a construction error, not a first-use crash, and
/// triggers are processed one flow at a time so replies cannot interleave
/// out of send order.
pub struct ChatSession<B: ChatBackend, R: Renderer> {
    panel: ChatPanel,
    input: InputField,
    backend: B,
    renderer: R,
}

impl<B: ChatBackend, R: Renderer> ChatSession<B, R> {
    pub fn new(panel: ChatPanel, backend: B, renderer: R) -> Self {
        Self {
            panel,
            input: InputField::new(),
            backend,
            renderer,
        }
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    pub fn panel(&self) -> &ChatPanel {
        &self.panel
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Both input bindings land here with no further parameters.
    pub async fn trigger(&mut self, trigger: Trigger) {
        tracing::debug!(trigger = trigger.as_str(), "send triggered");
        self.send().await;
    }

    /// One round trip:
    /// read-and-clear the input, render the user message optimistically,
    /// issue the request, render the reply or the fallback. Everything up to
    /// the request happens synchronously; nothing here ever propagates an
    /// error to the caller.
    async fn send(&mut self) {
        let Some(text) = self.input.take_trimmed() else {
            return;
        };

        self.render(Message::user(&text));

        let send_id = uuid::Uuid::new_v4();
        tracing::debug!(%send_id, chars = text.len(), "sending message");

        let reply = match self.backend.ask(&text).await {
            Ok(reply) => reply,
            Err(err) => {
                // Detail stays in the logs; the user sees one apologetic bot line.
                tracing::warn!(%send_id, error = %err, "chat request failed");
                FALLBACK_REPLY.to_string()
            }
        };

        self.render(Message::bot(reply));
    }

    fn render(&mut self, message: Message) {
        self.renderer.show(&message);
        self.panel.append(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::ChatError;
    use crate::domain::entities::Sender;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend double: records every asked message, answers with a canned
    /// reply or a network error.
    struct MockBackend {
        reply: Option<String>,
        asked: Mutex<Vec<String>>,
    }

    impl MockBackend {
        fn replying(reply: impl Into<String>) -> Self {
            Self {
                reply: Some(reply.into()),
                asked: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                asked: Mutex::new(Vec::new()),
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatBackend for MockBackend {
        async fn ask(&self, message: &str) -> Result<String, ChatError> {
            self.asked.lock().unwrap().push(message.to_string());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(ChatError::Network("connection refused".to_string())),
            }
        }
    }

    /// Renderer double: records what was shown, in order.
    #[derive(Default)]
    struct RecordingRenderer {
        shown: Vec<(Sender, String)>,
    }

    impl Renderer for RecordingRenderer {
        fn show(&mut self, message: &Message) {
            self.shown.push((message.sender, message.text.clone()));
        }
    }

    fn session(backend: MockBackend) -> ChatSession<MockBackend, RecordingRenderer> {
        ChatSession::new(ChatPanel::new(4), backend, RecordingRenderer::default())
    }

    #[tokio::test]
    async fn test_round_trip_renders_user_then_bot() {
        let mut session = session(MockBackend::replying("Hi there!"));
        session.input_mut().set("  hello  ");
        session.trigger(Trigger::EnterKey).await;

        // Trimmed before anything else touches it
        assert_eq!(session.backend().asked(), vec!["hello"]);

        let messages = session.panel().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[1].text, "Hi there!");

        assert_eq!(session.input_mut().value(), "");
        assert_eq!(session.panel().scroll(), session.panel().max_scroll());
    }

    #[tokio::test]
    async fn test_whitespace_only_input_is_ignored() {
        let mut session = session(MockBackend::replying("unused"));
        session.input_mut().set("   ");
        session.trigger(Trigger::EnterKey).await;

        assert!(session.panel().is_empty());
        assert!(session.backend().asked().is_empty());
        assert_eq!(session.input_mut().value(), "   ");
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let mut session = session(MockBackend::replying("unused"));
        session.trigger(Trigger::SendButton).await;

        assert!(session.panel().is_empty());
        assert!(session.backend().asked().is_empty());
    }

    #[tokio::test]
    async fn test_failure_renders_fallback_reply() {
        let mut session = session(MockBackend::failing());
        session.input_mut().set("ping");
        session.trigger(Trigger::EnterKey).await;

        let messages = session.panel().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "ping");
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[1].text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_both_triggers_run_the_same_flow() {
        let mut session = session(MockBackend::replying("ok"));

        session.input_mut().set("via enter");
        session.trigger(Trigger::EnterKey).await;

        session.input_mut().set("via button");
        session.trigger(Trigger::SendButton).await;

        assert_eq!(session.backend().asked(), vec!["via enter", "via button"]);
        assert_eq!(session.panel().len(), 4);
    }

    #[tokio::test]
    async fn test_repeated_sends_are_independent_round_trips() {
        let mut session = session(MockBackend::replying("Hi there!"));
        for _ in 0..2 {
            session.input_mut().set("hello");
            session.trigger(Trigger::EnterKey).await;
        }

        assert_eq!(session.backend().asked(), vec!["hello", "hello"]);
        let texts: Vec<&str> = session
            .panel()
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["hello", "Hi there!", "hello", "Hi there!"]);
    }

    #[tokio::test]
    async fn test_renderer_sees_every_append_in_order() {
        let mut session = session(MockBackend::replying("pong"));
        session.input_mut().set("ping");
        session.trigger(Trigger::EnterKey).await;

        let ChatSession { renderer, .. } = session;
        assert_eq!(
            renderer.shown,
            vec![
                (Sender::User, "ping".to_string()),
                (Sender::Bot, "pong".to_string()),
            ]
        );
    }
}
