// src/vision/anthropic.rs
// Claude vision: short subject description for the avatar prompt

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use super::{PhotoAnalyzer, PhotoDescription};
use crate::avatar::provider::response_json_or_error;
use crate::error::{HeroError, Result};
use crate::http::truncate_body;
use crate::photo::PhotoUpload;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 300;

const INSTRUCTION: &str = "\
Describe the person in this photo for an illustrator in one or two sentences: \
hair, face shape, skin tone, glasses or other distinctive features. \
Reply with JSON only: {\"gender\": \"...\", \"description\": \"...\"}. \
Use \"unknown\" for gender unless it is clearly visible.";

#[derive(Debug, Serialize)]
struct MessageRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Value>,
}

#[derive(Debug, Deserialize, Default)]
struct RawDescription {
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

pub struct AnthropicVision {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl AnthropicVision {
    pub fn new(http: Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_for(&self, photo: &PhotoUpload) -> MessageRequest {
        MessageRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![json!({
                "role": "user",
                "content": [
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": photo.mime_type(),
                            "data": photo.to_base64(),
                        }
                    },
                    { "type": "text", "text": INSTRUCTION }
                ]
            })],
        }
    }
}

/// Concatenated text blocks of a Messages API response
fn response_text(payload: &Value) -> String {
    payload
        .get("content")
        .and_then(Value::as_array)
        .map(|blocks| {
            blocks
                .iter()
                .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|b| b.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

fn normalize_gender(raw: Option<String>) -> Option<String> {
    let gender = raw?.trim().to_lowercase();
    match gender.as_str() {
        "" | "unknown" | "unclear" | "n/a" | "none" | "unspecified" => None,
        _ => Some(gender),
    }
}

/// Models sometimes wrap the JSON in prose or a code fence; take the
/// outermost object. Plain prose becomes the description as-is.
fn parse_description(text: &str) -> Result<PhotoDescription> {
    let text = text.trim();
    if text.is_empty() {
        return Err(HeroError::MalformedResponse(
            "vision response contained no text".to_string(),
        ));
    }

    let raw = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            serde_json::from_str::<RawDescription>(&text[start..=end]).unwrap_or_default()
        }
        _ => RawDescription::default(),
    };

    let description = raw
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| text.to_string());

    Ok(PhotoDescription {
        gender: normalize_gender(raw.gender),
        description,
    })
}

#[async_trait]
impl PhotoAnalyzer for AnthropicVision {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn describe(&self, photo: &PhotoUpload) -> Result<PhotoDescription> {
        info!(model = %self.model, bytes = photo.len(), "Describing photo");

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request_for(photo))
            .send()
            .await?;
        let payload = response_json_or_error(self.name(), response).await?;

        let text = response_text(&payload);
        debug!(text = %truncate_body(&text, 120), "Vision response");
        parse_description(&text)
    }
}
