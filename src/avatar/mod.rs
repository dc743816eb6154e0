// src/avatar/mod.rs
// Avatar generation: prompt building, provider calls, job polling

pub mod factory;
pub mod openai;
pub mod poll;
pub mod prompt;
pub mod provider;
pub mod replicate;

use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::{HeroError, Result};
use crate::persona::PersonaRecord;
use crate::photo::PhotoUpload;
use crate::vision::PhotoDescription;

pub use poll::{PollPolicy, Sleeper, TokioSleeper, poll_until_terminal};
pub use prompt::build_prompt;
pub use provider::{GenerationRequest, ImageProvider, JobHandle, JobStatus, ProviderKind, Submission};

/// What to do when the provider fails. One policy per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Surface the provider error to the caller
    #[default]
    Propagate,
    /// Answer with a color placeholder derived from the persona
    Placeholder,
}

impl FailurePolicy {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "propagate" | "error" => Some(Self::Propagate),
            "placeholder" | "fallback" => Some(Self::Placeholder),
            _ => None,
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Deterministic stand-in image built from the persona's card colors
pub fn placeholder_url(persona: &PersonaRecord) -> String {
    let start = persona.card_color.start.trim_start_matches('#');
    let end = persona.card_color.end.trim_start_matches('#');
    format!(
        "https://placehold.co/1024x1024/{start}/{end}/png?text={}",
        urlencoding::encode(persona.display_name())
    )
}

/// Turns a resolved persona into an avatar URL using one configured provider
pub struct AvatarRequester {
    provider: Arc<dyn ImageProvider>,
    poll: PollPolicy,
    sleeper: Arc<dyn Sleeper>,
    failure_policy: FailurePolicy,
}

impl AvatarRequester {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            provider,
            poll: PollPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    /// Generate the avatar for `persona`.
    ///
    /// Under [`FailurePolicy::Placeholder`] every provider failure becomes
    /// [`placeholder_url`]; cancellation is always returned as an error.
    pub async fn request(
        &self,
        persona: &PersonaRecord,
        photo: Option<&PhotoUpload>,
        subject: Option<&PhotoDescription>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let request = GenerationRequest {
            prompt: build_prompt(persona, subject),
            photo,
        };

        match self.generate(&request, cancel).await {
            Ok(url) => Ok(url),
            Err(HeroError::Cancelled) => Err(HeroError::Cancelled),
            Err(e) if self.failure_policy == FailurePolicy::Placeholder => {
                warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Avatar generation failed, serving placeholder"
                );
                Ok(placeholder_url(persona))
            }
            Err(e) => Err(e),
        }
    }

    async fn generate(&self, request: &GenerationRequest<'_>, cancel: &CancellationToken) -> Result<String> {
        let submission = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(HeroError::Cancelled),
            submission = self.provider.submit(request) => submission?,
        };

        let url = match submission {
            Submission::Ready(url) => url,
            Submission::Pending(job) => {
                info!(provider = self.provider.name(), job_id = %job.id, "Provider queued job, polling");
                poll_until_terminal(self.provider.as_ref(), &job, self.poll, self.sleeper.as_ref(), cancel)
                    .await?
            }
        };

        if url.trim().is_empty() {
            return Err(HeroError::MalformedResponse(format!(
                "{} returned an empty image URL",
                self.provider.name()
            )));
        }
        Ok(url)
    }
}
