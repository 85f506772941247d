use anyhow::{Context, Result};
use tracing::info;

use crate::domains::agent::models::{non_empty, StateUpdate, WorkflowState};
use crate::domains::agent::prompts::summary_prompt;
use crate::kernel::ServerDeps;

/// Summarize the scraped article in one completion.
///
/// The model's text is kept verbatim. A failed completion aborts the run.
pub async fn summarize_article(state: &WorkflowState, deps: &ServerDeps) -> Result<StateUpdate> {
    let Some(article) = non_empty(&state.scraped_content) else {
        return Ok(StateUpdate::unchanged().summary(None));
    };

    info!(chars = article.len(), "Summarizing article");
    let summary = deps
        .ai
        .complete(&summary_prompt(article))
        .await
        .context("Failed to summarize article")?;

    Ok(StateUpdate::unchanged().summary(Some(summary)))
}
