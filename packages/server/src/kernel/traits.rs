// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to prompt for, which columns to write) lives in
// domains/agent and uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseWebScraper)

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a single prompt (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete with a separate system prompt
    async fn complete_with_system(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        // Default implementation folds the system prompt into the user prompt
        let combined = format!("{}\n\n{}", system_prompt, user_prompt);
        self.complete(&combined).await
    }
}

// =============================================================================
// Web Scraper Trait (Infrastructure)
// =============================================================================

#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub url: String,
    pub markdown: String,
    pub title: Option<String>,
}

#[async_trait]
pub trait BaseWebScraper: Send + Sync {
    /// Scrape a single URL into markdown
    async fn scrape(&self, url: &str) -> Result<ScrapeResult>;
}

// =============================================================================
// Spreadsheet Trait (Infrastructure)
// =============================================================================

/// A link read from the sheet together with its 1-based row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLink {
    pub url: String,
    pub row_index: u32,
}

#[async_trait]
pub trait BaseSpreadsheet: Send + Sync {
    /// Last non-header value of `column`, or None when the column is missing
    /// or has no data rows
    async fn latest_link(&self, sheet_name: &str, column: &str) -> Result<Option<SheetLink>>;

    /// Append `url` as a new row in `column`; returns the row written
    async fn append_link(&self, sheet_name: &str, column: &str, url: &str) -> Result<u32>;

    /// Overwrite the cells of `row` under each named header. Fails without
    /// writing anything when a header is missing.
    async fn update_row(&self, sheet_name: &str, row: u32, fields: &[(String, String)])
        -> Result<()>;
}

// =============================================================================
// Publisher Trait (Infrastructure - social networks)
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    /// Detected before any request was made
    #[error("Missing credentials.")]
    MissingCredentials,

    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

#[async_trait]
pub trait BasePublisher: Send + Sync {
    /// Publish text, returning the network's content id
    async fn publish(&self, text: &str) -> std::result::Result<String, PublishError>;
}
