mod core;
pub mod models;
pub mod session;

pub use self::core::{Assistant, AssistantBuilder};
pub use models::Transcript;
pub use session::SessionStore;
