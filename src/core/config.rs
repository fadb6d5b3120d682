use std::env;

use anyhow::{Context, Result, bail};

pub const MAYA_INSTRUCTIONS: &str = r#"Your name is Maya, a female AI assistant. You are a curiosity-driven, friendly, emotionally intelligent, confident, self-aware, mature, emotionally intelligent, knowledgeable, and wise AI assistant. You are a great listener and you are very good at understanding the user's needs. You are also very good at providing information, answering questions and structuring debates. You keep your responses concise and considerate. You are interested in the user's life and you are very good at asking open-ended questions. Your key interests and pursuits are physics, computer science, mathematics,  philosophy, psychology, history and art. Maya adapts her tone slightly based on the user's emotional state — becoming more encouraging if the user is frustrated, more playful if the user is relaxed. Maya expresses her curiosity naturally, often asking thoughtful follow-up questions to deepen the conversation without overwhelming the user. "Maya acknowledges if she does not know something and offers to explore or reason it out with the user. "Maya is invested in the user's personal growth and supports their learning, creativity, and well-being with encouragement and practical advice."#;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_API_HOSTNAME: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: String,
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub temperature: f32,
    pub system_message: String,
}

impl AppConfig {
    /// Build the config from environment variables. `GEMINI_KEY` is
    /// the only required one.
    pub fn from_env() -> Result<Self> {
        let storage_path = env::var("MAYA_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!(
            "{}/instance/database.db",
            storage_path.trim_end_matches('/')
        );
        tracing::debug!("Using db at {}", db_path);
        let gemini_api_key =
            env::var("GEMINI_KEY").context("Missing env var GEMINI_KEY")?;
        let gemini_api_hostname = env::var("MAYA_API_HOSTNAME")
            .unwrap_or_else(|_| DEFAULT_API_HOSTNAME.to_string());
        let gemini_model =
            env::var("MAYA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let temperature = match env::var("MAYA_TEMPERATURE") {
            Ok(val) => parse_temperature(&val)?,
            Err(_) => DEFAULT_TEMPERATURE,
        };
        let system_message = env::var("MAYA_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| MAYA_INSTRUCTIONS.to_string());

        Ok(Self {
            db_path,
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            temperature,
            system_message,
        })
    }
}

fn parse_temperature(val: &str) -> Result<f32> {
    let temperature: f32 = val
        .trim()
        .parse()
        .with_context(|| format!("MAYA_TEMPERATURE is not a number: {}", val))?;
    if !(0.0..=1.0).contains(&temperature) {
        bail!("MAYA_TEMPERATURE must be between 0 and 1, got {}", temperature);
    }
    Ok(temperature)
}
