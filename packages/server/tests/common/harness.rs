//! Test harness driving the router in-process.
//!
//! Every external service is a mock from `kernel::test_dependencies`, so
//! tests can inspect what the agent sent where after each request.

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use social_agent::config::ServerMode;
use social_agent::kernel::{ConversationStore, TestDependencies};
use social_agent::server::{build_app, AxumAppState};
use tower::ServiceExt;

const DEFAULT_ORIGIN: &str = "http://localhost:5173";

pub struct TestHarness {
    pub deps: TestDependencies,
    pub conversations: ConversationStore,
    app: Router,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    pub fn with_deps(deps: TestDependencies) -> Self {
        Self::build(deps, ServerMode::Full, &[DEFAULT_ORIGIN])
    }

    pub fn minimal(deps: TestDependencies) -> Self {
        Self::build(deps, ServerMode::Minimal, &[DEFAULT_ORIGIN])
    }

    pub fn with_origins(origins: &[&str]) -> Self {
        Self::build(TestDependencies::new(), ServerMode::Full, origins)
    }

    fn build(deps: TestDependencies, mode: ServerMode, origins: &[&str]) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let conversations = ConversationStore::new();
        let state = AxumAppState::new(deps.into_deps(), conversations.clone());
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let app = build_app(state, mode, &origins);

        Self {
            deps,
            conversations,
            app,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Body::empty()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Body::from(body.to_string()))
            .await
    }

    /// Send a CORS preflight for a POST to `uri` and return the response headers.
    pub async fn preflight(&self, uri: &str, origin: &str) -> (StatusCode, HeaderMap) {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header("origin", origin)
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        (response.status(), response.headers().clone())
    }

    async fn send(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
