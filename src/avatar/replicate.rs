// src/avatar/replicate.rs
// Replicate predictions API - job-style generation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use super::provider::{
    GenerationRequest, ImageProvider, JobHandle, JobStatus, ProviderKind, Submission,
    response_json_or_error,
};
use crate::error::{HeroError, Result};

/// Input field image-conditioned models read the photo from
pub const DEFAULT_IMAGE_INPUT: &str = "input_image";

pub struct ReplicateImages {
    http: Client,
    api_token: String,
    base_url: String,
    model: String,
    image_input: String,
}

impl ReplicateImages {
    pub fn new(http: Client, api_token: String) -> Self {
        Self {
            http,
            api_token,
            base_url: ProviderKind::Replicate.default_base_url().to_string(),
            model: ProviderKind::Replicate.default_model().to_string(),
            image_input: DEFAULT_IMAGE_INPUT.to_string(),
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

    pub fn with_image_input(mut self, field: impl Into<String>) -> Self {
        self.image_input = field.into();
        self
    }

    /// `owner/name` runs the model's latest version; `owner/name:version`
    /// pins one through the generic predictions endpoint.
    fn prediction_target(&self, input: Value) -> (String, Value) {
        match self.model.split_once(':') {
            Some((_, version)) => (
                format!("{}/predictions", self.base_url),
                json!({ "version": version, "input": input }),
            ),
            None => (
                format!("{}/models/{}/predictions", self.base_url, self.model),
                json!({ "input": input }),
            ),
        }
    }
}

/// A prediction payload, reduced to what the poll loop needs
#[derive(Debug, PartialEq, Eq)]
enum Prediction {
    Pending,
    Succeeded(String),
    Failed(String),
}

fn parse_prediction(payload: &Value) -> Result<Prediction> {
    let status = payload
        .get("status")
        .and_then(Value::as_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match status.as_str() {
        "starting" | "processing" => Ok(Prediction::Pending),
        "succeeded" => output_url(payload).map(Prediction::Succeeded),
        "failed" | "canceled" => {
            let reason = payload
                .get("error")
                .and_then(Value::as_str)
                .filter(|e| !e.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("prediction {status}"));
            Ok(Prediction::Failed(reason))
        }
        "" => Err(HeroError::MalformedResponse(
            "replicate prediction has no status".to_string(),
        )),
        other => Err(HeroError::MalformedResponse(format!(
            "replicate prediction has unknown status '{other}'"
        ))),
    }
}

/// First http(s) URL in `output`, which is a string or an array of them
fn output_url(payload: &Value) -> Result<String> {
    let first = match payload.get("output") {
        Some(Value::String(url)) => Some(url.as_str()),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).next(),
        _ => None,
    };
    first
        .map(str::trim)
        .filter(|url| url.starts_with("http"))
        .map(str::to_string)
        .ok_or_else(|| {
            HeroError::MalformedResponse("replicate prediction succeeded without an output URL".to_string())
        })
}

fn job_handle(payload: &Value, base_url: &str) -> Result<JobHandle> {
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| HeroError::MalformedResponse("replicate prediction has no id".to_string()))?;
    let poll_url = payload
        .pointer("/urls/get")
        .and_then(Value::as_str)
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{base_url}/predictions/{id}"));
    Ok(JobHandle {
        id: id.to_string(),
        poll_url,
    })
}

#[async_trait]
impl ImageProvider for ReplicateImages {
    fn name(&self) -> &str {
        "replicate"
    }

    async fn submit(&self, request: &GenerationRequest<'_>) -> Result<Submission> {
        let mut input = Map::new();
        input.insert("prompt".to_string(), Value::String(request.prompt.clone()));
        input.insert("output_format".to_string(), Value::String("png".to_string()));
        if let Some(photo) = request.photo {
            input.insert(self.image_input.clone(), Value::String(photo.to_data_url()));
        }

        let (endpoint, body) = self.prediction_target(Value::Object(input));
        info!(model = %self.model, endpoint = %endpoint, "Creating Replicate prediction");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;
        let payload = response_json_or_error(self.name(), response).await?;

        match parse_prediction(&payload)? {
            Prediction::Succeeded(url) => Ok(Submission::Ready(url)),
            Prediction::Pending => Ok(Submission::Pending(job_handle(&payload, &self.base_url)?)),
            Prediction::Failed(reason) => Err(HeroError::JobFailed {
                provider: self.name().to_string(),
                job_id: payload
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                reason,
            }),
        }
    }

    async fn check(&self, job: &JobHandle) -> Result<JobStatus> {
        let response = self
            .http
            .get(&job.poll_url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        let payload = response_json_or_error(self.name(), response).await?;

        let status = match parse_prediction(&payload)? {
            Prediction::Pending => JobStatus::Pending,
            Prediction::Succeeded(url) => JobStatus::Succeeded(url),
            Prediction::Failed(reason) => JobStatus::Failed(reason),
        };
        debug!(job_id = %job.id, status = ?status, "Replicate prediction status");
        Ok(status)
    }
}
