//! Full agent chain
//!
//! A fixed list of named steps with a single branch at the start:
//! 1. `add_url` when the caller supplied a URL, else `fetch_url`
//! 2. `scrape` → `summarize` → `generate_content` → `post_content` → `update_sheet`
//!
//! Each step reads the current state and returns a StateUpdate that is
//! merged in before the next step runs. Only language model failures stop
//! the chain early.

use std::fmt;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::domains::agent::activities::{
    add_url_to_sheet, compose_post, fetch_link, post_content, scrape_article, summarize_article,
    update_sheet,
};
use crate::domains::agent::models::{non_empty, StateUpdate, WorkflowState};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AddUrl,
    FetchUrl,
    Scrape,
    Summarize,
    GenerateContent,
    PostContent,
    UpdateSheet,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::AddUrl => "add_url",
            Step::FetchUrl => "fetch_url",
            Step::Scrape => "scrape",
            Step::Summarize => "summarize",
            Step::GenerateContent => "generate_content",
            Step::PostContent => "post_content",
            Step::UpdateSheet => "update_sheet",
        }
    }

    async fn run(self, state: &WorkflowState, deps: &ServerDeps) -> Result<StateUpdate> {
        let update = match self {
            Step::AddUrl => add_url_to_sheet(state, deps).await,
            Step::FetchUrl => fetch_link(deps).await,
            Step::Scrape => scrape_article(state, deps).await,
            Step::Summarize => summarize_article(state, deps).await?,
            Step::GenerateContent => {
                compose_post(non_empty(&state.summary), deps.network, deps.ai.as_ref()).await?
            }
            Step::PostContent => post_content(state, deps.publisher.as_ref()).await,
            Step::UpdateSheet => update_sheet(state, deps).await,
        };
        Ok(update)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The steps a run will take, decided once from the incoming state.
pub fn plan(state: &WorkflowState) -> Vec<Step> {
    let entry = if state.has_url() {
        Step::AddUrl
    } else {
        Step::FetchUrl
    };

    vec![
        entry,
        Step::Scrape,
        Step::Summarize,
        Step::GenerateContent,
        Step::PostContent,
        Step::UpdateSheet,
    ]
}

/// Run the whole chain once and return the final state.
#[instrument(skip_all, fields(url = state.url.as_deref().unwrap_or("<sheet>")))]
pub async fn run_agent(deps: &ServerDeps, mut state: WorkflowState) -> Result<WorkflowState> {
    for step in plan(&state) {
        info!(step = step.name(), "Running step");
        let update = step
            .run(&state, deps)
            .await
            .with_context(|| format!("Step '{}' failed", step))?;
        update.apply(&mut state);
    }

    info!(
        url = state.url.as_deref().unwrap_or(""),
        status = state.publish_status.as_deref().unwrap_or(""),
        "Agent workflow completed"
    );
    Ok(state)
}
