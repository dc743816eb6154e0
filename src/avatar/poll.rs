// src/avatar/poll.rs
// Bounded status polling for job-style providers

use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::provider::{ImageProvider, JobHandle, JobStatus};
use crate::error::{HeroError, Result};

/// Wait between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Status checks before giving up (~60s at the default interval)
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

/// Sleep source for the poll loop; tests swap in one that returns at once
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real wall-clock sleeping
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Poll `job` until it succeeds, fails, or `policy.max_attempts` checks
/// have come back pending.
///
/// Each attempt sleeps for `policy.interval` and then makes exactly one
/// status call. `cancel` is observed during both.
pub async fn poll_until_terminal(
    provider: &dyn ImageProvider,
    job: &JobHandle,
    policy: PollPolicy,
    sleeper: &dyn Sleeper,
    cancel: &CancellationToken,
) -> Result<String> {
    for attempt in 1..=policy.max_attempts {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(HeroError::Cancelled),
            _ = sleeper.sleep(policy.interval) => {}
        }

        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(HeroError::Cancelled),
            status = provider.check(job) => status?,
        };

        match status {
            JobStatus::Succeeded(url) => {
                debug!(provider = provider.name(), job_id = %job.id, attempt, "Job succeeded");
                return Ok(url);
            }
            JobStatus::Failed(reason) => {
                warn!(provider = provider.name(), job_id = %job.id, attempt, reason = %reason, "Job failed");
                return Err(HeroError::JobFailed {
                    provider: provider.name().to_string(),
                    job_id: job.id.clone(),
                    reason,
                });
            }
            JobStatus::Pending => {
                debug!(provider = provider.name(), job_id = %job.id, attempt, "Job still pending");
            }
        }
    }

    warn!(
        provider = provider.name(),
        job_id = %job.id,
        attempts = policy.max_attempts,
        "Gave up waiting for job"
    );
    Err(HeroError::PollTimeout {
        provider: provider.name().to_string(),
        job_id: job.id.clone(),
        attempts: policy.max_attempts,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::{RecordingSleeper, ScriptedProvider, job};
    use super::*;

    fn pending(n: usize) -> Vec<JobStatus> {
        vec![JobStatus::Pending; n]
    }

    #[tokio::test]
    async fn test_returns_url_after_exactly_n_checks() {
        let mut statuses = pending(4);
        statuses.push(JobStatus::Succeeded("https://x/y.png".into()));
        let provider = ScriptedProvider::pending_job(statuses);
        let sleeper = RecordingSleeper::default();

        let url = poll_until_terminal(
            &provider,
            &job(),
            PollPolicy::default(),
            &sleeper,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(url, "https://x/y.png");
        assert_eq!(provider.check_count(), 5);
        assert_eq!(sleeper.recorded(), vec![DEFAULT_POLL_INTERVAL; 5]);
    }

    #[tokio::test]
    async fn test_never_terminal_times_out_at_max_attempts() {
        let provider = ScriptedProvider::pending_job(Vec::new());
        let sleeper = RecordingSleeper::default();

        let err = poll_until_terminal(
            &provider,
            &job(),
            PollPolicy::default(),
            &sleeper,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, HeroError::PollTimeout { attempts: 60, .. }));
        assert_eq!(provider.check_count(), DEFAULT_MAX_POLL_ATTEMPTS as usize);
        assert_eq!(sleeper.recorded().len(), DEFAULT_MAX_POLL_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_success_on_last_allowed_attempt() {
        let policy = PollPolicy {
            interval: Duration::from_millis(250),
            max_attempts: 3,
        };
        let mut statuses = pending(2);
        statuses.push(JobStatus::Succeeded("https://x/last.png".into()));
        let provider = ScriptedProvider::pending_job(statuses);
        let sleeper = RecordingSleeper::default();

        let url = poll_until_terminal(&provider, &job(), policy, &sleeper, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(url, "https://x/last.png");
        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(250); 3]);
    }

    #[tokio::test]
    async fn test_failed_job_stops_polling() {
        let provider = ScriptedProvider::pending_job(vec![
            JobStatus::Pending,
            JobStatus::Failed("NSFW content detected".into()),
            JobStatus::Succeeded("https://never".into()),
        ]);
        let sleeper = RecordingSleeper::default();

        let err = poll_until_terminal(
            &provider,
            &job(),
            PollPolicy::default(),
            &sleeper,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        match err {
            HeroError::JobFailed { reason, job_id, .. } => {
                assert_eq!(reason, "NSFW content detected");
                assert_eq!(job_id, "job-1");
            }
            other => panic!("expected JobFailed, got {other:?}"),
        }
        assert_eq!(provider.check_count(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_checking() {
        let provider = ScriptedProvider::pending_job(Vec::new());
        let sleeper = RecordingSleeper::default();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = poll_until_terminal(&provider, &job(), PollPolicy::default(), &sleeper, &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, HeroError::Cancelled));
        assert_eq!(provider.check_count(), 0);
    }

    #[tokio::test]
    async fn test_tokio_sleeper_honours_interval() {
        let started = std::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
