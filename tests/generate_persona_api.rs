// tests/generate_persona_api.rs

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use womancart::avatar::{
    AvatarRequester, FailurePolicy, GenerationRequest, ImageProvider, JobHandle, JobStatus, PollPolicy,
    Sleeper, Submission,
};
use womancart::persona::DEFAULT_PERSONA;
use womancart::photo::PhotoUpload;
use womancart::vision::{PhotoAnalyzer, PhotoDescription};
use womancart::web::{AppState, GeneratePersonaResponse, create_router};
use womancart::{HeroError, Result};

const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";
const BODY_LIMIT: usize = 10 * 1024 * 1024;

enum Behavior {
    Ready(&'static str),
    Fail(&'static str),
    Job(Mutex<VecDeque<JobStatus>>),
}

/// Image provider that counts calls and remembers the last prompt
struct StubProvider {
    behavior: Behavior,
    submits: AtomicUsize,
    checks: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            submits: AtomicUsize::new(0),
            checks: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn submits(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    fn last_prompt(&self) -> String {
        self.last_prompt.lock().unwrap().clone().unwrap_or_default()
    }
}

#[async_trait]
impl ImageProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn submit(&self, request: &GenerationRequest<'_>) -> Result<Submission> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt.clone());
        match &self.behavior {
            Behavior::Ready(url) => Ok(Submission::Ready(url.to_string())),
            Behavior::Fail(message) => Err(HeroError::Upstream {
                provider: "stub".into(),
                status: 500,
                message: message.to_string(),
            }),
            Behavior::Job(_) => Ok(Submission::Pending(JobHandle {
                id: "job-7".into(),
                poll_url: "http://stub/jobs/job-7".into(),
            })),
        }
    }

    async fn check(&self, _job: &JobHandle) -> Result<JobStatus> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Job(statuses) => Ok(statuses.lock().unwrap().pop_front().unwrap_or(JobStatus::Pending)),
            _ => Err(HeroError::InvalidInput("not a job provider".into())),
        }
    }
}

struct InstantSleeper;

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

struct StubAnalyzer {
    result: Option<PhotoDescription>,
}

#[async_trait]
impl PhotoAnalyzer for StubAnalyzer {
    fn name(&self) -> &str {
        "stub-vision"
    }

    async fn describe(&self, _photo: &PhotoUpload) -> Result<PhotoDescription> {
        self.result
            .clone()
            .ok_or_else(|| HeroError::MalformedResponse("vision unavailable".into()))
    }
}

fn app_with(state: AppState) -> axum::Router {
    create_router(state, BODY_LIMIT)
}

fn app(provider: Arc<StubProvider>) -> axum::Router {
    app_with(AppState::new(
        AvatarRequester::new(provider).with_sleeper(Arc::new(InstantSleeper)),
    ))
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-persona")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ghost_request() -> Value {
    json!({
        "answers": {"cartBehavior": "ghost", "paymentStyle": "prepaid", "shoppingSpeed": "lightning"},
        "photo": PHOTO
    })
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_ghost_prepaid_lightning_end_to_end() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let (status, body) = send(app(provider.clone()), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::OK);
    let response: GeneratePersonaResponse = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(response.persona_title, "⚡ Lightning Cart Ghost 👻");
    assert_eq!(response.tagline, "If it takes longer than 5 mins, it's abandoned");
    assert_eq!(response.card_color.start, "#667eea");
    assert_eq!(response.card_color.end, "#764ba2");
    assert_eq!(response.avatar_url, "https://x/y.png");
    assert_eq!(response.superhero_name.as_deref(), Some("Captain Vanish"));
    for field in ["trait1", "trait2", "trait3"] {
        assert!(!body[field].as_str().unwrap().is_empty(), "{field}");
    }
    assert_eq!(provider.submits(), 1);
    assert!(provider.last_prompt().contains("COSTUME:"));
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let request = Request::builder()
        .method("GET")
        .uri("/api/generate-persona")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(provider.clone()), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
    assert_eq!(provider.submits(), 0);
}

#[tokio::test]
async fn test_missing_photo_is_client_error() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let mut request = ghost_request();
    request.as_object_mut().unwrap().remove("photo");

    let (status, body) = send(app(provider.clone()), post_json(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Photo is required"}));
    assert_eq!(provider.submits(), 0);
}

#[tokio::test]
async fn test_missing_answers_is_client_error() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let (status, body) = send(app(provider.clone()), post_json(json!({"photo": PHOTO}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Answers are required");
    assert_eq!(provider.submits(), 0);
}

#[tokio::test]
async fn test_invalid_photo_is_client_error() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let mut request = ghost_request();
    request["photo"] = json!("data:text/plain;base64,aGVsbG8=");

    let (status, body) = send(app(provider.clone()), post_json(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid photo");
    assert!(body["details"].as_str().unwrap().contains("text/plain"));
    assert_eq!(provider.submits(), 0);
}

#[tokio::test]
async fn test_malformed_json_keeps_rejection_status() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate-persona")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app(provider.clone()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(provider.submits(), 0);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let app = create_router(AppState::new(AvatarRequester::new(provider.clone())), 64);

    let (status, body) = send(app, post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(provider.submits(), 0);
}

#[tokio::test]
async fn test_unknown_answers_resolve_to_default_persona() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let request = json!({
        "answers": {"cartBehavior": "hoarder", "paymentStyle": "crypto", "shoppingSpeed": "glacial"},
        "photo": PHOTO
    });

    let (status, body) = send(app(provider.clone()), post_json(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personaTitle"], DEFAULT_PERSONA.title);
    assert_eq!(body["trait1"], DEFAULT_PERSONA.traits[0]);
    assert!(body.get("superheroName").is_none());
    assert_eq!(provider.submits(), 1);
}

#[tokio::test]
async fn test_described_fallback_builds_traits_from_answers() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let state = AppState::new(AvatarRequester::new(provider)).with_describe_fallback(true);
    let request = json!({
        "answers": {"cartBehavior": "ghost", "paymentStyle": "crypto", "shoppingSpeed": "zen"},
        "photo": PHOTO
    });

    let (status, body) = send(app_with(state), post_json(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personaTitle"], DEFAULT_PERSONA.title);
    assert_eq!(body["trait1"], "Master of the saved-for-later list");
    assert_eq!(body["trait2"], "Payment philosopher");
    assert_eq!(body["trait3"], "Browses like it's a spa day");
}

#[tokio::test]
async fn test_provider_failure_returns_error_envelope() {
    let provider = StubProvider::new(Behavior::Fail("model overloaded"));
    let (status, body) = send(app(provider.clone()), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Superhero generation failed");
    assert!(body["details"].as_str().unwrap().contains("model overloaded"));
    assert!(body.get("personaTitle").is_none());
}

#[tokio::test]
async fn test_placeholder_policy_answers_with_placeholder() {
    let provider = StubProvider::new(Behavior::Fail("model overloaded"));
    let state = AppState::new(
        AvatarRequester::new(provider).with_failure_policy(FailurePolicy::Placeholder),
    );

    let (status, body) = send(app_with(state), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["avatarUrl"],
        "https://placehold.co/1024x1024/667eea/764ba2/png?text=Captain%20Vanish"
    );
}

#[tokio::test]
async fn test_job_provider_is_polled_through_endpoint() {
    let provider = StubProvider::new(Behavior::Job(Mutex::new(VecDeque::from([
        JobStatus::Pending,
        JobStatus::Succeeded("https://x/job.png".into()),
    ]))));

    let (status, body) = send(app(provider.clone()), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["avatarUrl"], "https://x/job.png");
    assert_eq!(provider.checks.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_stuck_job_times_out_as_server_error() {
    let provider = StubProvider::new(Behavior::Job(Mutex::new(VecDeque::new())));
    let requester = AvatarRequester::new(provider.clone())
        .with_sleeper(Arc::new(InstantSleeper))
        .with_poll_policy(PollPolicy {
            interval: Duration::from_secs(1),
            max_attempts: 3,
        });

    let (status, body) = send(app_with(AppState::new(requester)), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["details"].as_str().unwrap().contains("3 status checks"));
    assert_eq!(provider.checks.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_shutdown_cancels_generation() {
    let provider = StubProvider::new(Behavior::Job(Mutex::new(VecDeque::new())));
    let state = AppState::new(AvatarRequester::new(provider.clone()).with_sleeper(Arc::new(InstantSleeper)));
    state.shutdown.cancel();

    let (status, body) = send(app_with(state), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Server is shutting down");
    assert_eq!(provider.checks.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_photo_description_reaches_prompt() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let analyzer: Arc<dyn PhotoAnalyzer> = Arc::new(StubAnalyzer {
        result: Some(PhotoDescription {
            gender: None,
            description: "curly hair, round glasses".into(),
        }),
    });
    let state = AppState::new(AvatarRequester::new(provider.clone())).with_analyzer(Some(analyzer));

    let (status, _) = send(app_with(state), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::OK);
    let prompt = provider.last_prompt();
    assert!(prompt.contains("SUBJECT:\ncurly hair, round glasses"));
    assert!(!prompt.contains("Presents as"));
}

#[tokio::test]
async fn test_vision_failure_does_not_block_generation() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let analyzer: Arc<dyn PhotoAnalyzer> = Arc::new(StubAnalyzer { result: None });
    let state = AppState::new(AvatarRequester::new(provider.clone())).with_analyzer(Some(analyzer));

    let (status, body) = send(app_with(state), post_json(ghost_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["avatarUrl"], "https://x/y.png");
    assert!(!provider.last_prompt().contains("SUBJECT:"));
}

#[tokio::test]
async fn test_health() {
    let provider = StubProvider::new(Behavior::Ready("https://x/y.png"));
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(app(provider), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
