//! Server dependencies for agent activities (using traits for testability)
//!
//! Every external service sits behind a Base* trait so tests can swap in the
//! mocks from `test_dependencies`.

use std::sync::Arc;

use anyhow::Result;

use crate::config::{Config, SheetSettings};
use crate::domains::agent::models::Network;
use crate::kernel::{
    BaseAI, BasePublisher, BaseSpreadsheet, BaseWebScraper, FirecrawlClient, GoogleSheetsAdapter,
    LinkedInPublisher, OpenAIAdapter, XPublisher,
};

/// Dependencies shared by every run
#[derive(Clone)]
pub struct ServerDeps {
    pub ai: Arc<dyn BaseAI>,
    pub scraper: Arc<dyn BaseWebScraper>,
    pub sheets: Arc<dyn BaseSpreadsheet>,
    pub publisher: Arc<dyn BasePublisher>,
    /// Selects the style template and write-back columns
    pub network: Network,
    pub sheet: SheetSettings,
}

impl ServerDeps {
    pub fn new(
        ai: Arc<dyn BaseAI>,
        scraper: Arc<dyn BaseWebScraper>,
        sheets: Arc<dyn BaseSpreadsheet>,
        publisher: Arc<dyn BasePublisher>,
        network: Network,
        sheet: SheetSettings,
    ) -> Self {
        Self {
            ai,
            scraper,
            sheets,
            publisher,
            network,
            sheet,
        }
    }

    /// Build production adapters from configuration.
    ///
    /// Missing scrape, sheet or publish credentials are not fatal here; the
    /// affected steps degrade at run time.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let ai = OpenAIAdapter::new(&config.llm_api_key, &config.llm_base_url, &config.llm_model);
        let scraper = FirecrawlClient::new(config.firecrawl_api_key.clone())?;
        let sheets = GoogleSheetsAdapter::from_credentials(
            config.google_sheets_access_token.as_deref(),
            &config.google_service_account_file,
        )
        .await;

        let publisher: Arc<dyn BasePublisher> = match config.publish_network {
            Network::LinkedIn => Arc::new(LinkedInPublisher::from_credentials(
                config.linkedin_access_token.as_deref(),
                config.linkedin_person_id.as_deref(),
                config.linkedin_organization_id.as_deref(),
            )),
            Network::X => Arc::new(XPublisher::from_credentials(
                config.x_access_token.as_deref(),
            )),
        };

        tracing::info!(
            model = %config.llm_model,
            network = %config.publish_network,
            sheet = %config.sheet.sheet_name,
            "Server dependencies initialized"
        );

        Ok(Self::new(
            Arc::new(ai),
            Arc::new(scraper),
            Arc::new(sheets),
            publisher,
            config.publish_network,
            config.sheet.clone(),
        ))
    }
}
