mod config;
pub use config::{AppConfig, MAYA_INSTRUCTIONS};
pub mod db;
pub mod markdown;
