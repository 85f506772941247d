// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{
    BaseAI, BasePublisher, BaseSpreadsheet, BaseWebScraper, PublishError, ScrapeResult, ServerDeps,
    SheetLink,
};
use crate::config::SheetSettings;
use crate::domains::agent::models::Network;

// =============================================================================
// Mock Web Scraper
// =============================================================================

pub struct MockWebScraper {
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    scrape_calls: Arc<Mutex<Vec<String>>>,
}

impl MockWebScraper {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            scrape_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, markdown: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(markdown.to_string()));
        self
    }

    /// Queue a scrape failure
    pub fn with_error(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    /// Get all URLs that were scraped
    pub fn scrape_calls(&self) -> Vec<String> {
        self.scrape_calls.lock().unwrap().clone()
    }

    /// Check if a URL was scraped
    pub fn was_scraped(&self, url: &str) -> bool {
        self.scrape_calls.lock().unwrap().iter().any(|u| u == url)
    }
}

impl Default for MockWebScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseWebScraper for MockWebScraper {
    async fn scrape(&self, url: &str) -> Result<ScrapeResult> {
        self.scrape_calls.lock().unwrap().push(url.to_string());

        let next = {
            let mut responses = self.responses.lock().unwrap();
            (!responses.is_empty()).then(|| responses.remove(0))
        };

        match next {
            Some(Ok(markdown)) => Ok(ScrapeResult {
                url: url.to_string(),
                markdown,
                title: Some("Test Page".to_string()),
            }),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(ScrapeResult {
                url: url.to_string(),
                markdown: "# Mock Article\n\nThis is mock scraped content.".to_string(),
                title: Some("Mock Article".to_string()),
            }),
        }
    }
}

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

/// One recorded completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiCall {
    pub system: Option<String>,
    pub prompt: String,
}

pub struct MockAI {
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<AiCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Queue a failed completion
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<AiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last user prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.prompt.clone())
    }

    /// Check if a user prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.prompt.contains(text))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond(&self, call: AiCall) -> Result<String> {
        self.calls.lock().unwrap().push(call);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("Mock AI response".to_string());
        }
        responses.remove(0).map_err(|message| anyhow!(message))
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.respond(AiCall {
            system: None,
            prompt: prompt.to_string(),
        })
    }

    async fn complete_with_system(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.respond(AiCall {
            system: Some(system_prompt.to_string()),
            prompt: user_prompt.to_string(),
        })
    }
}

// =============================================================================
// Mock Spreadsheet (in-memory grid)
// =============================================================================

/// Rows are 1-based to callers; row 1 holds the headers.
pub struct MockSpreadsheet {
    rows: Arc<Mutex<Vec<Vec<String>>>>,
    failing: bool,
    fetch_calls: Arc<Mutex<usize>>,
    append_calls: Arc<Mutex<Vec<String>>>,
    update_calls: Arc<Mutex<Vec<(u32, Vec<(String, String)>)>>>,
}

impl MockSpreadsheet {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            failing: false,
            fetch_calls: Arc::new(Mutex::new(0)),
            append_calls: Arc::new(Mutex::new(Vec::new())),
            update_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A sheet with the link column and both networks' write-back columns
    pub fn with_default_headers() -> Self {
        Self::new().with_headers(&[
            "Media Links",
            "LinkedIn Content",
            "LinkedIn Status",
            "Twitter Content",
            "Twitter Status",
        ])
    }

    pub fn with_headers(self, headers: &[&str]) -> Self {
        {
            let mut rows = self.rows.lock().unwrap();
            let header_row = headers.iter().map(|h| h.to_string()).collect();
            if rows.is_empty() {
                rows.push(header_row);
            } else {
                rows[0] = header_row;
            }
        }
        self
    }

    /// Append a data row, cells given left to right
    pub fn with_row(self, cells: &[&str]) -> Self {
        self.rows
            .lock()
            .unwrap()
            .push(cells.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Every call fails as if the service were unreachable
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Value under `header` in 1-based `row`
    pub fn cell(&self, row: u32, header: &str) -> Option<String> {
        let rows = self.rows.lock().unwrap();
        let col = Self::column_of(&rows, header)?;
        rows.get(row.checked_sub(1)? as usize)?
            .get(col)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }

    pub fn append_calls(&self) -> Vec<String> {
        self.append_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<(u32, Vec<(String, String)>)> {
        self.update_calls.lock().unwrap().clone()
    }

    fn column_of(rows: &[Vec<String>], header: &str) -> Option<usize> {
        rows.first()?.iter().position(|h| h.trim() == header)
    }

    fn ensure_reachable(&self) -> Result<()> {
        if self.failing {
            bail!("Mock spreadsheet unavailable");
        }
        Ok(())
    }
}

impl Default for MockSpreadsheet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSpreadsheet for MockSpreadsheet {
    async fn latest_link(&self, _sheet_name: &str, column: &str) -> Result<Option<SheetLink>> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.ensure_reachable()?;

        let rows = self.rows.lock().unwrap();
        let Some(col) = Self::column_of(&rows, column) else {
            return Ok(None);
        };

        // Column read as the API returns it: trailing blanks trimmed
        let mut values: Vec<&str> = rows
            .iter()
            .map(|r| r.get(col).map(String::as_str).unwrap_or(""))
            .collect();
        while values.last().is_some_and(|v| v.is_empty()) {
            values.pop();
        }

        if values.len() < 2 {
            return Ok(None);
        }
        Ok(values.last().map(|url| SheetLink {
            url: url.to_string(),
            row_index: values.len() as u32,
        }))
    }

    async fn append_link(&self, _sheet_name: &str, column: &str, url: &str) -> Result<u32> {
        self.append_calls.lock().unwrap().push(url.to_string());
        self.ensure_reachable()?;

        let mut rows = self.rows.lock().unwrap();
        let col = Self::column_of(&rows, column)
            .ok_or_else(|| anyhow!("Column '{}' not found", column))?;

        let mut row = vec![String::new(); col + 1];
        row[col] = url.to_string();
        rows.push(row);
        Ok(rows.len() as u32)
    }

    async fn update_row(
        &self,
        _sheet_name: &str,
        row: u32,
        fields: &[(String, String)],
    ) -> Result<()> {
        self.update_calls
            .lock()
            .unwrap()
            .push((row, fields.to_vec()));
        self.ensure_reachable()?;

        let mut rows = self.rows.lock().unwrap();
        let mut cells = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            let col = Self::column_of(&rows, name)
                .ok_or_else(|| anyhow!("Missing columns: {}", name))?;
            cells.push((col, value.clone()));
        }

        let index = row
            .checked_sub(1)
            .ok_or_else(|| anyhow!("Row indexes are 1-based"))? as usize;
        if rows.len() <= index {
            rows.resize(index + 1, Vec::new());
        }
        let target = &mut rows[index];
        for (col, value) in cells {
            if target.len() <= col {
                target.resize(col + 1, String::new());
            }
            target[col] = value;
        }
        Ok(())
    }
}

// =============================================================================
// Mock Publisher
// =============================================================================

pub struct MockPublisher {
    responses: Arc<Mutex<Vec<Result<String, PublishError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(id.to_string()));
        self
    }

    pub fn with_error(self, error: PublishError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Texts that were published, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePublisher for MockPublisher {
    async fn publish(&self, text: &str) -> std::result::Result<String, PublishError> {
        self.calls.lock().unwrap().push(text.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("urn:li:share:mock".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub scraper: Arc<MockWebScraper>,
    pub sheets: Arc<MockSpreadsheet>,
    pub publisher: Arc<MockPublisher>,
    pub network: Network,
    pub sheet: SheetSettings,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            scraper: Arc::new(MockWebScraper::new()),
            sheets: Arc::new(MockSpreadsheet::with_default_headers()),
            publisher: Arc::new(MockPublisher::new()),
            network: Network::LinkedIn,
            sheet: SheetSettings::default(),
        }
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Set a mock web scraper
    pub fn mock_scraper(mut self, scraper: MockWebScraper) -> Self {
        self.scraper = Arc::new(scraper);
        self
    }

    /// Set a mock spreadsheet
    pub fn mock_sheets(mut self, sheets: MockSpreadsheet) -> Self {
        self.sheets = Arc::new(sheets);
        self
    }

    /// Set a mock publisher
    pub fn mock_publisher(mut self, publisher: MockPublisher) -> Self {
        self.publisher = Arc::new(publisher);
        self
    }

    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// ServerDeps sharing these mocks, so calls stay observable afterwards
    pub fn into_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.ai.clone(),
            self.scraper.clone(),
            self.sheets.clone(),
            self.publisher.clone(),
            self.network,
            self.sheet.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
