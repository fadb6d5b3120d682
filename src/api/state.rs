use std::sync::{Arc, RwLock};

use anyhow::Result;
use handlebars::Handlebars;
use tokio_rusqlite::Connection;

use super::templates::templates;
use crate::ai::chat::{Assistant, SessionStore};
use crate::core::AppConfig;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    pub assistant: Assistant,
    // One conversation per browser session
    pub sessions: SessionStore,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Result<Self> {
        let assistant = Assistant::from_config(&config);
        let sessions = SessionStore::new(&config.system_message);
        Ok(Self {
            db,
            assistant,
            sessions,
            templates: templates()?,
            config,
        })
    }
}
