//! Human review flow
//!
//! Split in two halves around a human decision:
//! - `generate_draft` composes a post from free-form context
//! - `publish_draft` takes the (possibly edited) draft and publishes it only
//!   when approved
//!
//! The caller parks the state between the halves.

use anyhow::Result;
use tracing::info;

use crate::domains::agent::activities::{compose_post, post_content};
use crate::domains::agent::models::WorkflowState;
use crate::kernel::ServerDeps;

/// Compose a draft from `user_context`. The draft may be absent.
pub async fn generate_draft(deps: &ServerDeps, user_context: &str) -> Result<WorkflowState> {
    let mut state = WorkflowState::for_context(user_context);

    compose_post(Some(user_context), deps.network, deps.ai.as_ref())
        .await?
        .apply(&mut state);

    info!(
        has_draft = state.post_text().is_some(),
        "Draft generated, awaiting approval"
    );
    Ok(state)
}

/// Substitute the reviewed script and publish it if approved.
pub async fn publish_draft(
    deps: &ServerDeps,
    mut state: WorkflowState,
    final_script: String,
    approved: bool,
) -> WorkflowState {
    state.generated_post = Some(final_script);
    state.user_approval = Some(approved);

    let update = post_content(&state, deps.publisher.as_ref()).await;
    update.apply(&mut state);
    state
}
