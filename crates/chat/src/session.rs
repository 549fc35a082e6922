use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::client::RagClient;
use crate::message::ChatMessage;

/// Greeting every new session opens with.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Chat session identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatSessionId(Uuid);

impl ChatSessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ChatSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChatSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ChatSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Why a user turn was not started.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnRejected {
    /// Input was empty after trimming; nothing appended, nothing sent.
    #[error("query must not be blank")]
    EmptyInput,

    /// A turn is already in flight for this session.
    #[error("a turn is already in flight")]
    Busy,
}

/// Outcome of a completed submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Assistant replied; the transcript grew by two messages.
    Answered,
    /// Upstream failed; the transcript grew by the user message only.
    Unanswered,
}

/// One conversation with the chat collaborator.
///
/// The transcript is append-only for the session's lifetime — no edits, no
/// deletions. Turns are strictly sequential: while a request is in flight
/// the session rejects further submissions instead of queueing them, the
/// same contract as the original widget's disabled input.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: ChatSessionId,
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl ChatSession {
    /// New session, seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            id: ChatSessionId::new(),
            messages: vec![ChatMessage::assistant(GREETING)],
            in_flight: false,
        }
    }

    pub fn id(&self) -> ChatSessionId {
        self.id
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Whole-transcript snapshot. Callers never observe a turn half-applied.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    /// Start a user turn: validate the input, stamp the loading flag, and
    /// append the user message. Returns the query to send upstream.
    pub fn begin_turn(&mut self, input: &str) -> Result<String, TurnRejected> {
        let query = input.trim();
        if query.is_empty() {
            return Err(TurnRejected::EmptyInput);
        }
        if self.in_flight {
            return Err(TurnRejected::Busy);
        }

        self.in_flight = true;
        self.messages.push(ChatMessage::user(query));
        Ok(query.to_string())
    }

    /// Finish the in-flight turn. `Some(answer)` appends the assistant
    /// reply; `None` leaves the transcript with the unanswered user message.
    /// Clears the loading flag either way.
    pub fn finish_turn(&mut self, answer: Option<String>) -> TurnOutcome {
        self.in_flight = false;
        match answer {
            Some(answer) => {
                self.messages.push(ChatMessage::assistant(answer));
                TurnOutcome::Answered
            }
            None => TurnOutcome::Unanswered,
        }
    }

    /// Submit one user turn and wait for the reply.
    ///
    /// On upstream failure the user message stays in the transcript, no
    /// assistant message is appended, and the failure is logged rather than
    /// surfaced.
    pub async fn submit(
        &mut self,
        client: &RagClient,
        input: &str,
    ) -> Result<TurnOutcome, TurnRejected> {
        let query = self.begin_turn(input)?;

        let answer = match client.ask(&query).await {
            Ok(answer) => Some(answer),
            Err(e) => {
                warn!(session = %self.id, error = %e, "chat turn failed; dropping assistant reply");
                None
            }
        };

        Ok(self.finish_turn(answer))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
