use anyhow::{Error, Result};
use tokio_rusqlite::{Connection, params};

use super::models::ChatRecord;

pub async fn insert_chat_record(
    db: &Connection,
    user_message: &str,
    maya_response: &str,
) -> Result<ChatRecord, Error> {
    let user_message = user_message.to_owned();
    let maya_response = maya_response.to_owned();
    let record = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "INSERT INTO chat_history (user_message, maya_response) VALUES (?1, ?2)",
            )?;
            stmt.execute(params![user_message, maya_response])?;
            Ok(ChatRecord {
                id: conn.last_insert_rowid(),
                user_message,
                maya_response,
            })
        })
        .await?;

    Ok(record)
}

pub async fn find_all_chat_records(db: &Connection) -> Result<Vec<ChatRecord>, Error> {
    let records = db.call(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, user_message, maya_response FROM chat_history ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], |i| {
                Ok(ChatRecord {
                    id: i.get(0)?,
                    user_message: i.get(1)?,
                    maya_response: i.get(2)?,
                })
            })?
            .collect::<Result<Vec<ChatRecord>, _>>()?;
        Ok(rows)
    });
    Ok(records.await?)
}

/// Delete every chat record. Returns the number of rows removed.
pub async fn clear_chat_records(db: &Connection) -> Result<usize, Error> {
    let deleted = db
        .call(|conn| {
            let deleted = conn.execute("DELETE FROM chat_history", [])?;
            Ok(deleted)
        })
        .await?;
    Ok(deleted)
}
