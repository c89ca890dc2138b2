#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::{get, post};
use axum::{Router, middleware};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use linkpulse::application::services::{AuthService, LinkService, MetricsService, RedirectService};
use linkpulse::api::handlers::{
    health_handler, login_handler, redirect_handler, signup_handler,
};
use linkpulse::api::middleware::auth;
use linkpulse::domain::click_event::ClickEvent;
use linkpulse::domain::entities::Link;
use linkpulse::infrastructure::cache::{CacheService, MemoryCache};
use linkpulse::infrastructure::classifier::{
    CategoryClassifier, ClassifierError, KeywordClassifier,
};
use linkpulse::infrastructure::persistence::{
    MemoryEventLog, MemoryLinkRepository, MemorySessionRepository, MemoryUserRepository,
};
use linkpulse::state::AppState;

/// Everything a test needs: the state plus direct handles on the shared
/// stores, the cache, and the consumer end of the click channel.
pub struct TestContext {
    pub state: AppState,
    pub click_rx: mpsc::Receiver<ClickEvent>,
    pub link_repo: Arc<MemoryLinkRepository>,
    pub event_log: Arc<MemoryEventLog>,
    pub cache: Arc<MemoryCache>,
}

/// A classifier that always fails, for exercising the fallback path.
pub struct FailingClassifier;

#[async_trait]
impl CategoryClassifier for FailingClassifier {
    async fn classify(&self, _long_url: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::Unavailable("simulated outage".to_string()))
    }
}

pub fn create_test_state() -> TestContext {
    create_test_state_with_classifier(Arc::new(KeywordClassifier::new()))
}

pub fn create_test_state_with_classifier(classifier: Arc<dyn CategoryClassifier>) -> TestContext {
    let link_repo = Arc::new(MemoryLinkRepository::new());
    let event_log = Arc::new(MemoryEventLog::new());
    let user_repo = Arc::new(MemoryUserRepository::new());
    let session_repo = Arc::new(MemorySessionRepository::new());
    let cache = Arc::new(MemoryCache::new());

    let (click_tx, click_rx) = mpsc::channel(100);

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repo.clone(), classifier)),
        redirect_service: Arc::new(RedirectService::new(
            link_repo.clone(),
            cache.clone() as Arc<dyn CacheService>,
            click_tx.clone(),
        )),
        metrics_service: Arc::new(MetricsService::new(
            link_repo.clone(),
            event_log.clone(),
            cache.clone() as Arc<dyn CacheService>,
        )),
        auth_service: Arc::new(AuthService::new(
            user_repo,
            session_repo,
            "test-signing-secret".to_string(),
        )),
        cache: cache.clone() as Arc<dyn CacheService>,
        click_sender: click_tx,
    };

    TestContext {
        state,
        click_rx,
        link_repo,
        event_log,
        cache,
    }
}

/// Builds a server over the full route surface (minus path normalization,
/// which axum-test does not need).
pub fn test_server(state: AppState) -> TestServer {
    let api = linkpulse::api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
        .nest("/api", api)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Seeds a link record directly into the store, the moral equivalent of the
/// raw-SQL seed helpers used against a real database.
pub fn seed_link(
    repo: &MemoryLinkRepository,
    code: &str,
    long_url: &str,
    owner_user_id: &str,
    created_at: DateTime<Utc>,
) {
    repo.insert_link(Link {
        id: format!("seed-{code}"),
        owner_user_id: owner_user_id.to_string(),
        code: code.to_string(),
        long_url: long_url.to_string(),
        category: None,
        created_at,
        clicks: 0,
    });
}

/// Signs up a fresh user and returns `(user_id, bearer token)`.
pub async fn signup(server: &TestServer, email: &str) -> (String, String) {
    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({ "email": email, "password": "hunter2222" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    (
        body["user"]["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
