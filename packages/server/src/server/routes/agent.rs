use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::agent::{run_agent, WorkflowState};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct RunAgentRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct RunAgentResponse {
    status: &'static str,
    message: &'static str,
    final_state: WorkflowState,
}

/// Run the whole chain. An empty URL falls back to the spreadsheet.
pub async fn run_agent_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<RunAgentRequest>,
) -> Result<Json<RunAgentResponse>, ApiError> {
    tracing::info!(url = request.url.as_deref().unwrap_or(""), "Received run-agent request");

    let final_state = run_agent(&state.deps, WorkflowState::for_url(request.url)).await?;

    Ok(Json(RunAgentResponse {
        status: "success",
        message: "Agent workflow completed.",
        final_state,
    }))
}
