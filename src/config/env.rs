// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::file::HeroFileConfig;
use crate::avatar::{FailurePolicy, PollPolicy, ProviderKind};
use crate::error::Result;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
/// Same ceiling the quiz front-end was built against
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// API keys loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// OpenAI API key (OPENAI_API_KEY)
    pub openai: Option<String>,
    /// Replicate token (REPLICATE_API_TOKEN or REPLICATE_API_KEY)
    pub replicate: Option<String>,
    /// Anthropic API key for the vision step (ANTHROPIC_API_KEY)
    pub anthropic: Option<String>,
}

impl ApiKeys {
    fn from_lookup(get: &dyn Fn(&str) -> Option<String>) -> Self {
        let keys = Self {
            openai: get("OPENAI_API_KEY"),
            replicate: get("REPLICATE_API_TOKEN").or_else(|| get("REPLICATE_API_KEY")),
            anthropic: get("ANTHROPIC_API_KEY"),
        };
        keys.log_status();
        keys
    }

    /// Credential for an image provider
    pub fn for_provider(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::OpenAi => self.openai.as_deref(),
            ProviderKind::Replicate => self.replicate.as_deref(),
        }
    }

    /// Log which API keys are available (without exposing values)
    fn log_status(&self) {
        let available = self.available();
        if available.is_empty() {
            warn!("No API keys configured - avatar generation will be unavailable");
        } else {
            debug!(keys = ?available, "API keys loaded");
        }
    }

    fn available(&self) -> Vec<&'static str> {
        let mut available = Vec::new();
        if self.openai.is_some() {
            available.push("OpenAI");
        }
        if self.replicate.is_some() {
            available.push("Replicate");
        }
        if self.anthropic.is_some() {
            available.push("Anthropic");
        }
        available
    }

    /// Get a summary of available providers
    pub fn summary(&self) -> String {
        let available = self.available();
        if available.is_empty() {
            "None".to_string()
        } else {
            available.join(", ")
        }
    }
}

/// Base URL overrides, mostly for proxies and tests
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    /// OPENAI_BASE_URL
    pub openai: Option<String>,
    /// REPLICATE_API_BASE
    pub replicate: Option<String>,
    /// ANTHROPIC_BASE_URL
    pub anthropic: Option<String>,
}

/// How avatars get generated
#[derive(Debug, Clone, Default)]
pub struct GenerationConfig {
    /// IMAGE_PROVIDER
    pub provider: ProviderKind,
    /// OPENAI_IMAGE_MODEL / REPLICATE_MODEL, depending on the provider
    pub model: Option<String>,
    /// IMAGE_SIZE (OpenAI only)
    pub image_size: Option<String>,
    /// HERO_POLL_INTERVAL_MS, HERO_POLL_MAX_ATTEMPTS
    pub poll: PollPolicy,
    /// HERO_FAILURE_POLICY
    pub failure_policy: FailurePolicy,
    /// HERO_VISION: describe the photo before generating
    pub vision: bool,
    /// VISION_MODEL
    pub vision_model: Option<String>,
    /// HERO_DESCRIBE_FALLBACK: unknown combinations get answer-derived traits
    pub describe_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HERO_HOST
    pub host: String,
    /// HERO_PORT
    pub port: u16,
    /// HERO_MAX_BODY_BYTES
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub api_keys: ApiKeys,
    pub endpoints: Endpoints,
    pub generation: GenerationConfig,
    pub server: ServerConfig,
    /// Values that were set but could not be understood
    pub problems: Vec<String>,
}

impl EnvConfig {
    /// Load the config file (if any) and overlay the process environment.
    /// Call once at startup, after `.env` has been applied.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        info!("Loading environment configuration");
        let file = HeroFileConfig::load(config_path)?;
        Ok(Self::from_lookup(|name| std::env::var(name).ok(), &file))
    }

    /// Build from an arbitrary variable source. Env beats file, file beats
    /// built-in defaults. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, file: &HeroFileConfig) -> Self {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut problems = Vec::new();
        let generation_file = &file.generation;
        let server_file = &file.server;

        let provider = match get("IMAGE_PROVIDER").or_else(|| generation_file.provider.clone()) {
            Some(raw) => ProviderKind::from_str(&raw).unwrap_or_else(|| {
                problems.push(format!(
                    "Unknown image provider '{raw}'. Valid options: openai, replicate"
                ));
                ProviderKind::default()
            }),
            None => ProviderKind::default(),
        };

        let model_var = match provider {
            ProviderKind::OpenAi => "OPENAI_IMAGE_MODEL",
            ProviderKind::Replicate => "REPLICATE_MODEL",
        };

        let mut poll = PollPolicy::default();
        if let Some(ms) = parsed::<u64>(&get, "HERO_POLL_INTERVAL_MS", &mut problems)
            .or(generation_file.poll_interval_ms)
        {
            poll.interval = Duration::from_millis(ms);
        }
        if let Some(attempts) = parsed::<u32>(&get, "HERO_POLL_MAX_ATTEMPTS", &mut problems)
            .or(generation_file.max_poll_attempts)
        {
            poll.max_attempts = attempts;
        }

        let failure_policy = match get("HERO_FAILURE_POLICY").or_else(|| generation_file.failure_policy.clone()) {
            Some(raw) => FailurePolicy::from_str(&raw).unwrap_or_else(|| {
                problems.push(format!(
                    "Unknown failure policy '{raw}'. Valid options: propagate, placeholder"
                ));
                FailurePolicy::default()
            }),
            None => FailurePolicy::default(),
        };

        let generation = GenerationConfig {
            provider,
            model: get(model_var).or_else(|| generation_file.model.clone()),
            image_size: get("IMAGE_SIZE").or_else(|| generation_file.image_size.clone()),
            poll,
            failure_policy,
            vision: flag(&get, "HERO_VISION", &mut problems)
                .or(generation_file.vision)
                .unwrap_or(false),
            vision_model: get("VISION_MODEL").or_else(|| generation_file.vision_model.clone()),
            describe_fallback: flag(&get, "HERO_DESCRIBE_FALLBACK", &mut problems)
                .or(generation_file.describe_fallback)
                .unwrap_or(false),
        };

        let defaults = ServerConfig::default();
        let server = ServerConfig {
            host: get("HERO_HOST")
                .or_else(|| server_file.host.clone())
                .unwrap_or(defaults.host),
            port: parsed::<u16>(&get, "HERO_PORT", &mut problems)
                .or(server_file.port)
                .unwrap_or(defaults.port),
            max_body_bytes: parsed::<usize>(&get, "HERO_MAX_BODY_BYTES", &mut problems)
                .or(server_file.max_body_bytes)
                .unwrap_or(defaults.max_body_bytes),
        };

        Self {
            api_keys: ApiKeys::from_lookup(&get),
            endpoints: Endpoints {
                openai: get("OPENAI_BASE_URL"),
                replicate: get("REPLICATE_API_BASE"),
                anthropic: get("ANTHROPIC_BASE_URL"),
            },
            generation,
            server,
            problems,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        for problem in &self.problems {
            validation.add_error(problem.clone());
        }

        let provider = self.generation.provider;
        if self.api_keys.for_provider(provider).is_none() {
            validation.add_error(format!(
                "Image provider '{provider}' selected but {} is not set.",
                provider.api_key_env_var()
            ));
        }

        if self.generation.poll.max_attempts == 0 {
            validation.add_error("HERO_POLL_MAX_ATTEMPTS must be at least 1.");
        }
        if self.generation.poll.interval.is_zero() {
            validation.add_warning("HERO_POLL_INTERVAL_MS is 0; job providers will be polled without pause.");
        }

        if self.generation.vision && self.api_keys.anthropic.is_none() {
            validation.add_warning(
                "HERO_VISION is enabled but ANTHROPIC_API_KEY is not set; photos will not be described.",
            );
        }

        if self.server.max_body_bytes == 0 {
            validation.add_error("HERO_MAX_BODY_BYTES must be greater than 0.");
        }

        validation
    }
}

fn parsed<T: std::str::FromStr>(
    get: &dyn Fn(&str) -> Option<String>,
    name: &str,
    problems: &mut Vec<String>,
) -> Option<T> {
    let raw = get(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            problems.push(format!("{name}='{raw}' is not a valid number"));
            None
        }
    }
}

fn flag(get: &dyn Fn(&str) -> Option<String>, name: &str, problems: &mut Vec<String>) -> Option<bool> {
    let raw = get(name)?;
    let value = parse_bool(&raw);
    if value.is_none() {
        problems.push(format!("{name}='{raw}' is not a boolean"));
    }
    value
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
