use tracing::{info, warn};

use crate::domains::agent::models::{PublishStatus, StateUpdate, WorkflowState};
use crate::kernel::{BasePublisher, PublishError};

/// Publish the generated post unless approval was withheld.
///
/// Every outcome, including failure, is reported as a status string.
pub async fn post_content(state: &WorkflowState, publisher: &dyn BasePublisher) -> StateUpdate {
    let status = publish_status(state, publisher).await;
    StateUpdate::unchanged().publish_status(Some(status.into()))
}

async fn publish_status(state: &WorkflowState, publisher: &dyn BasePublisher) -> PublishStatus {
    if state.user_approval == Some(false) {
        info!("Post cancelled by user");
        return PublishStatus::Cancelled;
    }

    let Some(text) = state.post_text() else {
        info!("No post text, skipping publish");
        return PublishStatus::Skipped;
    };

    match publisher.publish(text).await {
        Ok(id) => {
            info!(post_id = %id, "Post published");
            PublishStatus::Posted { id }
        }
        Err(PublishError::MissingCredentials) => PublishStatus::MissingCredentials,
        Err(e) => {
            warn!(error = %e, "Publish failed");
            PublishStatus::Failed(e.to_string())
        }
    }
}
