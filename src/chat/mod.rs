mod db;
pub mod models;
mod turn;

pub use db::{clear_chat_records, find_all_chat_records, insert_chat_record};
pub use models::ChatRecord;
pub use turn::{TurnOutcome, run_turn};
