use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    status: &'static str,
}

/// Liveness probe
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "Server is up and running!",
    })
}
