use anyhow::{Error, Result};

use super::models::Transcript;
use crate::core::AppConfig;
use crate::gemini::{Content, Role, generate_content, response_text};

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Maya's connection to the LLM. Holds only the API settings, the
/// conversation lives in a `Transcript` that the caller owns and
/// passes in on each turn.
///
/// Use `Assistant::builder()` or `Assistant::from_config()` to
/// construct one.
#[derive(Clone, Debug)]
pub struct Assistant {
    api_hostname: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl Assistant {
    pub fn builder(api_hostname: &str, api_key: &str, model: &str) -> AssistantBuilder {
        AssistantBuilder::new(api_hostname, api_key, model)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        AssistantBuilder::new(
            &config.gemini_api_hostname,
            &config.gemini_api_key,
            &config.gemini_model,
        )
        .temperature(config.temperature)
        .build()
    }

    /// Runs the next turn of the conversation. The user's message is
    /// appended to the transcript before calling the LLM and the
    /// reply is appended after. If the call fails the user's message
    /// stays in the transcript.
    pub async fn converse(&self, transcript: &mut Transcript, prompt: &str) -> Result<String, Error> {
        transcript.push(Content::new(Role::User, prompt));

        let resp = generate_content(
            transcript.messages(),
            self.temperature,
            &self.api_hostname,
            &self.api_key,
            &self.model,
        )
        .await?;
        let reply = response_text(&resp)?;

        transcript.push(Content::new(Role::Model, &reply));

        Ok(reply)
    }
}

pub struct AssistantBuilder {
    api_hostname: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl AssistantBuilder {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn build(self) -> Assistant {
        Assistant {
            api_hostname: self.api_hostname,
            api_key: self.api_key,
            model: self.model,
            temperature: self.temperature,
        }
    }
}
