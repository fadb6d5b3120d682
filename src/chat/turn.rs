use anyhow::Error;
use tokio_rusqlite::Connection;

use super::db::insert_chat_record;
use super::models::ChatRecord;
use crate::ai::chat::{Assistant, Transcript};

/// What happened to a single submitted message.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The message was empty so nothing was sent.
    Skipped,
    Saved(ChatRecord),
    AssistantFailed(Error),
    StorageFailed(Error),
}

/// Send `message` to the assistant and save the exchange.
///
/// If the exchange can't be saved it is also removed from the
/// transcript so the model never remembers a turn that isn't in the
/// chat log. A failed LLM call leaves the user's message in the
/// transcript.
pub async fn run_turn(
    assistant: &Assistant,
    transcript: &mut Transcript,
    db: &Connection,
    message: &str,
) -> TurnOutcome {
    if message.trim().is_empty() {
        return TurnOutcome::Skipped;
    }

    let reply = match assistant.converse(transcript, message).await {
        Ok(reply) => reply,
        Err(e) => return TurnOutcome::AssistantFailed(e),
    };

    match insert_chat_record(db, message, &reply).await {
        Ok(record) => TurnOutcome::Saved(record),
        Err(e) => {
            transcript.pop_exchange();
            TurnOutcome::StorageFailed(e)
        }
    }
}
