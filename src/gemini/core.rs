use std::time::Duration;

use anyhow::{Error, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

// Gemini calls a single message in the conversation a "content":
//
// Object {
//     "role": String("user"),
//     "parts": Array [
//         Object { "text": String("Hello") }
//     ]
// }
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, text: &str) -> Self {
        Content {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    /// All text parts joined together.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Call the `generateContent` endpoint with the full conversation
/// history. Gemini is stateless so every turn must be sent each
/// time.
pub async fn generate_content(
    contents: &[Content],
    temperature: f32,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, Error> {
    let payload = json!({
        "contents": contents,
        "generationConfig": {
            "temperature": temperature,
        },
    });
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches("/"),
        model
    );

    tracing::debug!("Sending {} contents to {}", contents.len(), model);

    let response = reqwest::Client::new()
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        bail!("Gemini request failed with status {}: {}", status, error_text);
    }

    Ok(response.json().await?)
}

/// Extract the reply text from a `generateContent` response. Fails
/// when the model returned no text, e.g. the prompt was blocked.
pub fn response_text(resp: &Value) -> Result<String, Error> {
    if let Some(reason) = resp["promptFeedback"]["blockReason"].as_str() {
        bail!("Prompt was blocked: {}", reason);
    }

    let candidate = &resp["candidates"][0];
    let text: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate["finishReason"].as_str().unwrap_or("unknown");
        return Err(anyhow!(
            "No text received (finish reason: {}). Resp:\n\n {}",
            reason,
            resp
        ));
    }

    Ok(text)
}
