use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::agent::{generate_draft, publish_draft, PublishStatus};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

const CONVERSATION_NOT_FOUND: &str = "Conversation not found or has expired.";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub user_context: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    status: &'static str,
    result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub conversation_id: String,
    pub final_script: String,
    pub user_approval: bool,
}

#[derive(Serialize)]
pub struct PostResponse {
    status: String,
}

/// Draft a post from free-form context and park it for review.
pub async fn generate_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    tracing::info!(context_chars = request.user_context.len(), "Received generate request");

    let draft = generate_draft(&state.deps, &request.user_context).await?;

    let Some(script) = draft.post_text().map(str::to_string) else {
        return Ok(Json(GenerateResponse {
            status: "failed",
            result: "Script generation failed.".to_string(),
            conversation_id: None,
        }));
    };

    let conversation_id = state.conversations.insert(draft).await;
    tracing::info!(%conversation_id, "Draft stored for review");

    Ok(Json(GenerateResponse {
        status: "Script generated, awaiting approval",
        result: script,
        conversation_id: Some(conversation_id),
    }))
}

/// Resume a parked draft: publish the reviewed script or cancel.
pub async fn post_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let not_found = || ApiError::NotFound(CONVERSATION_NOT_FOUND.to_string());

    let id = Uuid::parse_str(request.conversation_id.trim()).map_err(|_| not_found())?;
    let parked = state.conversations.take(&id).await.ok_or_else(not_found)?;

    tracing::info!(
        conversation_id = %id,
        approved = request.user_approval,
        "Received review decision"
    );

    if !request.user_approval {
        return Ok(Json(PostResponse {
            status: PublishStatus::Cancelled.to_string(),
        }));
    }

    let done = publish_draft(&state.deps, parked, request.final_script, true).await;

    Ok(Json(PostResponse {
        status: done
            .publish_status
            .unwrap_or_else(|| "Workflow ended without posting.".to_string()),
    }))
}
