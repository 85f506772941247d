use anyhow::{Context, Result};
use tracing::info;

use crate::domains::agent::models::{Network, StateUpdate};
use crate::domains::agent::prompts::style_prompt;
use crate::kernel::BaseAI;

/// Write a post about `source` in the network's house style.
///
/// `source` is a summary in the chain or free-form context in the review
/// flow. No source means no post and no completion call.
pub async fn compose_post(
    source: Option<&str>,
    network: Network,
    ai: &dyn BaseAI,
) -> Result<StateUpdate> {
    let Some(source) = source.filter(|s| !s.trim().is_empty()) else {
        return Ok(StateUpdate::unchanged().generated_post(None));
    };

    info!(%network, source_chars = source.len(), "Composing post");
    let post = ai
        .complete_with_system(style_prompt(network), source)
        .await
        .context("Failed to generate post")?;

    Ok(StateUpdate::unchanged().generated_post(Some(post)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::agent::models::WorkflowState;
    use crate::kernel::test_dependencies::MockAI;

    #[tokio::test]
    async fn test_uses_network_style_as_system_prompt() {
        let ai = MockAI::new().with_response("TRUST IS FRAGILE.");
        let mut state = WorkflowState::default();

        compose_post(Some("blockchain and trust"), Network::X, &ai)
            .await
            .unwrap()
            .apply(&mut state);

        assert_eq!(state.generated_post.as_deref(), Some("TRUST IS FRAGILE."));
        let call = &ai.calls()[0];
        assert_eq!(call.prompt, "blockchain and trust");
        assert_eq!(call.system.as_deref(), Some(style_prompt(Network::X)));
    }

    #[tokio::test]
    async fn test_blank_source_makes_no_call() {
        let ai = MockAI::new();

        let update = compose_post(Some("  "), Network::LinkedIn, &ai).await.unwrap();

        let mut state = WorkflowState::default();
        update.apply(&mut state);
        assert_eq!(state.generated_post, None);
        assert_eq!(ai.call_count(), 0);
    }
}
