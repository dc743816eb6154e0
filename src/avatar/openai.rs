// src/avatar/openai.rs
// OpenAI Images API - synchronous edits/generations

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};
use tracing::{debug, info};

use super::provider::{
    GenerationRequest, ImageProvider, JobHandle, JobStatus, ProviderKind, Submission,
    response_json_or_error,
};
use crate::error::{HeroError, Result};

pub const DEFAULT_SIZE: &str = "1024x1024";

/// OpenAI image client. With a photo it calls `/images/edits` so the
/// avatar keeps the person's likeness; without one, `/images/generations`.
pub struct OpenAiImages {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    size: String,
}

impl OpenAiImages {
    pub fn new(http: Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            base_url: ProviderKind::OpenAi.default_base_url().to_string(),
            model: ProviderKind::OpenAi.default_model().to_string(),
            size: DEFAULT_SIZE.to_string(),
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

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// `data[0].url`, or `data[0].b64_json` wrapped as a PNG data URL
fn extract_image(payload: &Value) -> Result<String> {
    let first = payload
        .get("data")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .ok_or_else(|| HeroError::MalformedResponse("openai response has no data[0]".to_string()))?;

    if let Some(url) = first.get("url").and_then(Value::as_str).filter(|u| !u.trim().is_empty()) {
        return Ok(url.to_string());
    }
    if let Some(b64) = first.get("b64_json").and_then(Value::as_str).filter(|b| !b.is_empty()) {
        return Ok(format!("data:image/png;base64,{b64}"));
    }
    Err(HeroError::MalformedResponse(
        "openai data[0] carries neither url nor b64_json".to_string(),
    ))
}

#[async_trait]
impl ImageProvider for OpenAiImages {
    fn name(&self) -> &str {
        "openai"
    }

    async fn submit(&self, request: &GenerationRequest<'_>) -> Result<Submission> {
        let response = match request.photo {
            Some(photo) => {
                let url = self.endpoint("images/edits");
                info!(model = %self.model, bytes = photo.len(), "Requesting OpenAI image edit");
                let image = Part::bytes(photo.bytes().to_vec())
                    .file_name(format!("photo.{}", photo.extension()))
                    .mime_str(photo.mime_type())?;
                let form = Form::new()
                    .text("model", self.model.clone())
                    .text("prompt", request.prompt.clone())
                    .text("size", self.size.clone())
                    .part("image", image);
                self.http
                    .post(url)
                    .bearer_auth(&self.api_key)
                    .multipart(form)
                    .send()
                    .await?
            }
            None => {
                let url = self.endpoint("images/generations");
                info!(model = %self.model, "Requesting OpenAI image generation");
                self.http
                    .post(url)
                    .bearer_auth(&self.api_key)
                    .json(&json!({
                        "model": self.model,
                        "prompt": request.prompt,
                        "size": self.size,
                        "n": 1,
                    }))
                    .send()
                    .await?
            }
        };

        let payload = response_json_or_error(self.name(), response).await?;
        let image = extract_image(&payload)?;
        debug!(inline = image.starts_with("data:"), "OpenAI image ready");
        Ok(Submission::Ready(image))
    }

    async fn check(&self, job: &JobHandle) -> Result<JobStatus> {
        Err(HeroError::InvalidInput(format!(
            "openai returns images synchronously; there is no job '{}' to check",
            job.id
        )))
    }
}
