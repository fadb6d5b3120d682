use std::fs;
use std::path::Path;

use anyhow::{Context, Error, Result};
use rusqlite::Connection as SyncConnection;
use tokio_rusqlite::Connection;

/// Open the sqlite database at `db_path`, creating the parent
/// directory if it doesn't exist yet.
pub async fn async_db(db_path: &str) -> Result<Connection, Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create db directory {}", parent.display()))?;
        }
    }
    let db = Connection::open(db_path)
        .await
        .with_context(|| format!("Failed to open db at {}", db_path))?;
    Ok(db)
}

pub fn initialize_db(conn: &SyncConnection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS chat_history (
            id INTEGER PRIMARY KEY,
            user_message TEXT NOT NULL,
            maya_response TEXT NOT NULL
        );
        "#,
    )
}
