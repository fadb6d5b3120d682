use serde::{Deserialize, Serialize};

/// One persisted exchange shown in the chat log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: i64,
    pub user_message: String,
    pub maya_response: String,
}
