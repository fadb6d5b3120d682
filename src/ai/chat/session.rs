//! Conversations are scoped to a browser session so that two people
//! chatting at the same time never see each other's turns in the
//! context sent to the LLM.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::sync::Mutex as AsyncMutex;

use super::models::Transcript;

pub type SharedTranscript = Arc<AsyncMutex<Transcript>>;

/// Upper bound on the number of conversations kept in memory. The
/// least recently used one is dropped to make room for a new one.
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

struct Session {
    transcript: SharedTranscript,
    last_used: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    system_message: String,
    max_sessions: usize,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new(system_message: &str) -> Self {
        Self::with_max_sessions(system_message, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(system_message: &str, max_sessions: usize) -> Self {
        Self {
            system_message: system_message.to_string(),
            max_sessions: max_sessions.max(1),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the transcript for `session_id`, seeding a new one if this
    /// is the first turn. The returned lock is held for the whole
    /// turn so turns within a session run one at a time.
    pub fn get_or_create(&self, session_id: &str) -> SharedTranscript {
        let mut sessions = self.sessions.lock().expect("Unable to lock sessions");
        let now = Instant::now();

        if let Some(session) = sessions.get_mut(session_id) {
            session.last_used = now;
            return Arc::clone(&session.transcript);
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_used)
                .map(|(id, _)| id.clone());
            if let Some(id) = oldest {
                tracing::debug!("Evicting least recently used session {}", id);
                sessions.remove(&id);
            }
        }

        tracing::debug!("Starting new conversation for session {}", session_id);
        let transcript = Arc::new(AsyncMutex::new(Transcript::seeded(&self.system_message)));
        sessions.insert(
            session_id.to_string(),
            Session {
                transcript: Arc::clone(&transcript),
                last_used: now,
            },
        );
        transcript
    }

    pub fn get(&self, session_id: &str) -> Option<SharedTranscript> {
        let sessions = self.sessions.lock().expect("Unable to lock sessions");
        sessions.get(session_id).map(|s| Arc::clone(&s.transcript))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().expect("Unable to lock sessions").len()
    }
}
