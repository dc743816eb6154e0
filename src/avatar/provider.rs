// src/avatar/provider.rs
// Image-generation provider abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{HeroError, Result};
use crate::http::truncate_body;
use crate::photo::PhotoUpload;

/// Image providers the service can be pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Synchronous image edits (the response carries the image)
    #[default]
    OpenAi,
    /// Prediction jobs that have to be polled
    Replicate,
}

impl ProviderKind {
    /// Parse provider from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "replicate" => Some(Self::Replicate),
            _ => None,
        }
    }

    /// Environment variable holding this provider's credential
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Replicate => "REPLICATE_API_TOKEN",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-image-1",
            Self::Replicate => "black-forest-labs/flux-kontext-pro",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Replicate => "https://api.replicate.com/v1",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Replicate => write!(f, "replicate"),
        }
    }
}

/// What gets sent to a provider for one avatar
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub prompt: String,
    pub photo: Option<&'a PhotoUpload>,
}

/// Reference to a provider-side job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub id: String,
    pub poll_url: String,
}

/// Result of the initial provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The image is already available
    Ready(String),
    /// The provider queued a job that must be polled
    Pending(JobHandle),
}

/// Status of a queued job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Succeeded(String),
    Failed(String),
}

/// Trait for image providers - one implementation per vendor API
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Start a generation
    async fn submit(&self, request: &GenerationRequest<'_>) -> Result<Submission>;

    /// Check a job returned by [`ImageProvider::submit`]
    async fn check(&self, job: &JobHandle) -> Result<JobStatus>;
}

/// Read a provider response as JSON, turning non-2xx statuses into
/// [`HeroError::Upstream`].
pub(crate) async fn response_json_or_error(provider: &str, response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(HeroError::Upstream {
            provider: provider.to_string(),
            status: status.as_u16(),
            message: upstream_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        HeroError::MalformedResponse(format!(
            "{provider} returned non-JSON body ({e}): {}",
            truncate_body(&body, 200)
        ))
    })
}

/// Pull the human-readable part out of a vendor error body
fn upstream_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("detail"))
                .or_else(|| v.get("error"))
        })
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| truncate_body(body, 512))
}
