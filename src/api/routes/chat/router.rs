//! Router for the chat API

use axum::{Router, extract::State, response::Json, routing::get};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::chat::find_all_chat_records;

/// Get every chat record in the order they were saved
async fn chat_history(
    State(state): State<SharedState>,
) -> Result<Json<public::ChatHistoryResponse>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let records = find_all_chat_records(&db).await?;
    Ok(Json(public::ChatHistoryResponse { records }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/history", get(chat_history))
}
