//! Scripted chat widget backed by an external text-generation service.
//!
//! The session keeps an append-only transcript. User messages appear
//! immediately; the service receives the transcript *before* the new message
//! as history plus the new message on its own. At most one request is
//! outstanding per session, and service failures turn into a fixed apology
//! instead of an error.

use async_trait::async_trait;
use log::{debug, error, info};
use shared::{AssistantConfig, ChatMessage, HistoryTurn, Locale};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(String),
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not parse response: {0}")]
    Parse(String),
}

/// External text-generation service
#[async_trait(?Send)]
pub trait TextCollaborator {
    /// Reply text for `message` given the prior turns. `Ok(None)` means the
    /// service answered without any text.
    async fn generate(
        &self,
        history: &[HistoryTurn],
        message: &str,
    ) -> Result<Option<String>, CollaboratorError>;
}

/// Asks the collaborator and always comes back with something to show
pub async fn reply_or_fallback<C>(
    collaborator: &C,
    history: &[HistoryTurn],
    message: &str,
    locale: Locale,
) -> String
where
    C: TextCollaborator + ?Sized,
{
    match collaborator.generate(history, message).await {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => locale.empty_reply_fallback().to_string(),
        Err(e) => {
            error!("Error calling text service: {}", e);
            locale.connection_error_fallback().to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendRejected {
    #[error("a reply is still pending")]
    Busy,
    #[error("message is empty")]
    EmptyMessage,
}

/// Request prepared by [`AssistantSession::begin_send`]
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingTurn {
    pub history: Vec<HistoryTurn>,
    pub message: String,
}

pub struct AssistantSession<C> {
    collaborator: C,
    locale: Locale,
    greeting_trigger: String,
    messages: RefCell<Vec<ChatMessage>>,
    pending: Cell<bool>,
    greeted: Cell<bool>,
}

impl<C: TextCollaborator> AssistantSession<C> {
    pub fn new(collaborator: C, config: &AssistantConfig, locale: Locale) -> Self {
        Self {
            collaborator,
            locale,
            greeting_trigger: config.greeting_trigger.clone(),
            messages: RefCell::new(Vec::new()),
            pending: Cell::new(false),
            greeted: Cell::new(false),
        }
    }

    /// Snapshot of the transcript
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Sends the greeting trigger with an empty history and shows the reply
    /// as the first message. Runs once per session.
    pub async fn greet(&self) -> Option<ChatMessage> {
        if self.greeted.get() || self.pending.get() {
            return None;
        }
        self.greeted.set(true);
        self.pending.set(true);
        debug!("🤖 Requesting greeting");

        let text = reply_or_fallback(&self.collaborator, &[], &self.greeting_trigger, self.locale).await;
        Some(self.finish(text))
    }

    /// Appends the user's message and marks the session busy. The returned
    /// turn carries the history as it was before this message.
    pub fn begin_send(&self, text: &str) -> Result<OutgoingTurn, SendRejected> {
        if self.pending.get() {
            debug!("🤖 Send ignored, reply pending");
            return Err(SendRejected::Busy);
        }
        if text.trim().is_empty() {
            return Err(SendRejected::EmptyMessage);
        }

        let mut messages = self.messages.borrow_mut();
        let history = messages.iter().map(HistoryTurn::from).collect();
        messages.push(ChatMessage::user(text));
        self.pending.set(true);

        Ok(OutgoingTurn {
            history,
            message: text.to_string(),
        })
    }

    /// Asks the collaborator for the prepared turn and appends its reply
    pub async fn complete(&self, turn: OutgoingTurn) -> ChatMessage {
        let text = reply_or_fallback(&self.collaborator, &turn.history, &turn.message, self.locale).await;
        self.finish(text)
    }

    pub async fn send(&self, text: &str) -> Result<ChatMessage, SendRejected> {
        let turn = self.begin_send(text)?;
        Ok(self.complete(turn).await)
    }

    fn finish(&self, text: String) -> ChatMessage {
        let reply = ChatMessage::assistant(text);
        self.messages.borrow_mut().push(reply.clone());
        self.pending.set(false);
        info!("🤖 Assistant replied ({} messages)", self.messages.borrow().len());
        reply
    }
}
