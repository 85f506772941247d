//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerMode;
use crate::kernel::{ConversationStore, ServerDeps};
use crate::server::routes::{generate_handler, post_handler, root_handler, run_agent_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
    /// Drafts parked between `/generate` and `/post`
    pub conversations: ConversationStore,
}

impl AxumAppState {
    pub fn new(deps: ServerDeps, conversations: ConversationStore) -> Self {
        Self {
            deps: Arc::new(deps),
            conversations,
        }
    }
}

/// Build the Axum application router
///
/// `Minimal` mode serves only the liveness probe and the full chain.
pub fn build_app(state: AxumAppState, mode: ServerMode, allowed_origins: &[String]) -> Router {
    let mut router = Router::new()
        .route("/", get(root_handler))
        .route("/run-agent", post(run_agent_handler));

    if mode == ServerMode::Full {
        router = router
            .route("/generate", post(generate_handler))
            .route("/post", post(post_handler));
    }

    router
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    // Credentials cannot be combined with a wildcard origin
    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}
