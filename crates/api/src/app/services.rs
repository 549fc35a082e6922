//! Shared application services injected into request handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shortfall_chat::{ChatMessage, ChatSession, ChatSessionId, RagClient, TurnRejected};
use shortfall_infra::InventoryStore;
use shortfall_predict::PredictClient;

/// Why a chat turn could not be started via the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginTurnError {
    UnknownSession,
    Rejected(TurnRejected),
}

/// Everything the route handlers need, injected via `Extension`.
pub struct AppServices {
    store: Arc<dyn InventoryStore>,
    predictor: PredictClient,
    rag: RagClient,
    sessions: Mutex<HashMap<ChatSessionId, ChatSession>>,
}

impl AppServices {
    /// Both external collaborators live behind one base URL: the model
    /// service hosts the prediction endpoints and `/rag`.
    pub fn new(store: Arc<dyn InventoryStore>, model_service_url: &str) -> Self {
        Self {
            store,
            predictor: PredictClient::new(model_service_url),
            rag: RagClient::new(model_service_url),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &dyn InventoryStore {
        self.store.as_ref()
    }

    pub fn predictor(&self) -> &PredictClient {
        &self.predictor
    }

    pub fn rag(&self) -> &RagClient {
        &self.rag
    }

    /// Create and register a chat session; returns its id and opening
    /// transcript.
    pub fn create_session(&self) -> (ChatSessionId, Vec<ChatMessage>) {
        let session = ChatSession::new();
        let id = session.id();
        let transcript = session.transcript();
        self.sessions.lock().unwrap().insert(id, session);
        (id, transcript)
    }

    pub fn transcript(&self, id: ChatSessionId) -> Option<Vec<ChatMessage>> {
        self.sessions
            .lock()
            .unwrap()
            .get(&id)
            .map(|session| session.transcript())
    }

    /// Stamp a user turn on the session under the lock. The upstream call
    /// itself happens outside the lock; the session's loading flag keeps
    /// concurrent submissions out in the meantime.
    pub fn begin_turn(&self, id: ChatSessionId, input: &str) -> Result<String, BeginTurnError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or(BeginTurnError::UnknownSession)?;
        session.begin_turn(input).map_err(BeginTurnError::Rejected)
    }

    /// Apply the upstream outcome and return the updated transcript.
    pub fn finish_turn(
        &self,
        id: ChatSessionId,
        answer: Option<String>,
    ) -> Option<Vec<ChatMessage>> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id)?;
        session.finish_turn(answer);
        Some(session.transcript())
    }
}
