//! Public types for the chat page
use serde::{Deserialize, Serialize};

use crate::chat::ChatRecord;

/// Cookie identifying the browser's conversation
pub const SESSION_COOKIE: &str = "maya_session";

#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatLogContext {
    pub records: Vec<ChatRecord>,
}
