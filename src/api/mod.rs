pub mod routes;
mod server;
pub use server::{app, reset_db, serve};
pub mod public;
mod state;
pub use state::{AppState, SharedState};
pub mod templates;
