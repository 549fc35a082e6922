use serde::{Deserialize, Serialize};

use shortfall_chat::{ChatMessage, ChatSessionId};
use shortfall_inventory::{DateParts, InventoryItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Calendar date the round is for, `YYYY-MM-DD`.
    pub date: String,
    /// Restrict the round to a single item.
    pub item_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub date_parts: DateParts,
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: ChatSessionId,
    pub messages: Vec<ChatMessage>,
}
