//! Agent domain - turn news articles into social posts.
//!
//! Flow: spreadsheet link → scrape → summarize → compose → publish → write back.
//! The review flow reuses compose and publish around a human approval.

pub mod activities;
pub mod models;
pub mod prompts;
pub mod workflows;

pub use models::{Network, PublishStatus, StateUpdate, WorkflowState};
pub use workflows::{generate_draft, publish_draft, run_agent};
