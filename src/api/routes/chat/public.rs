//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::ChatRecord;

#[derive(Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub records: Vec<ChatRecord>,
}
