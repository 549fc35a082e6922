//! `shortfall-chat`
//!
//! Transcript management for the dashboard's retrieval-augmented chat
//! widget: an append-only message list and a one-turn-at-a-time client for
//! the shared `/rag` endpoint.

pub mod client;
pub mod message;
pub mod session;

pub use client::{ChatError, RagClient};
pub use message::{ChatMessage, ChatRole};
pub use session::{ChatSession, ChatSessionId, GREETING, TurnOutcome, TurnRejected};
