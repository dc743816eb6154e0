// src/avatar/factory.rs
// Wire configured providers into ready-to-use clients

use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};

use super::openai::OpenAiImages;
use super::provider::{ImageProvider, ProviderKind};
use super::replicate::ReplicateImages;
use super::AvatarRequester;
use crate::config::EnvConfig;
use crate::error::{HeroError, Result};
use crate::vision::{AnthropicVision, PhotoAnalyzer};

/// Build the image provider selected by `IMAGE_PROVIDER`
pub fn build_image_provider(config: &EnvConfig, http: Client) -> Result<Arc<dyn ImageProvider>> {
    let kind = config.generation.provider;
    let key = config
        .api_keys
        .for_provider(kind)
        .ok_or_else(|| HeroError::MissingApiKey {
            provider: kind.to_string(),
            env_var: kind.api_key_env_var(),
        })?
        .to_string();
    let model = config
        .generation
        .model
        .clone()
        .unwrap_or_else(|| kind.default_model().to_string());

    info!(provider = %kind, model = %model, "Image provider configured");

    let provider: Arc<dyn ImageProvider> = match kind {
        ProviderKind::OpenAi => {
            let mut client = OpenAiImages::new(http, key).with_model(model);
            if let Some(base) = &config.endpoints.openai {
                client = client.with_base_url(base.as_str());
            }
            if let Some(size) = &config.generation.image_size {
                client = client.with_size(size.as_str());
            }
            Arc::new(client)
        }
        ProviderKind::Replicate => {
            let mut client = ReplicateImages::new(http, key).with_model(model);
            if let Some(base) = &config.endpoints.replicate {
                client = client.with_base_url(base.as_str());
            }
            Arc::new(client)
        }
    };
    Ok(provider)
}

/// The vision step, when enabled and keyed
pub fn build_photo_analyzer(config: &EnvConfig, http: Client) -> Option<Arc<dyn PhotoAnalyzer>> {
    if !config.generation.vision {
        return None;
    }
    let Some(key) = config.api_keys.anthropic.clone() else {
        warn!("Vision enabled without ANTHROPIC_API_KEY, skipping photo descriptions");
        return None;
    };

    let mut vision = AnthropicVision::new(http, key);
    if let Some(base) = &config.endpoints.anthropic {
        vision = vision.with_base_url(base.as_str());
    }
    if let Some(model) = &config.generation.vision_model {
        vision = vision.with_model(model.as_str());
    }
    info!("Photo descriptions enabled");
    Some(Arc::new(vision))
}

/// Provider plus the configured poll and failure policies
pub fn build_requester(config: &EnvConfig, http: Client) -> Result<AvatarRequester> {
    let provider = build_image_provider(config, http)?;
    Ok(AvatarRequester::new(provider)
        .with_poll_policy(config.generation.poll)
        .with_failure_policy(config.generation.failure_policy))
}
