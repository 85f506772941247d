use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{BaseWebScraper, ScrapeResult};

const FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";

#[derive(Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'a str; 1],
}

#[derive(Deserialize)]
struct ScrapeResponse {
    success: bool,
    data: Option<ScrapeData>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ScrapeData {
    markdown: Option<String>,
    metadata: Option<PageMetadata>,
}

#[derive(Deserialize)]
struct PageMetadata {
    title: Option<String>,
}

/// Firecrawl client implementation of BaseWebScraper
pub struct FirecrawlClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl FirecrawlClient {
    /// A missing key is allowed; every scrape then fails before any request.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to create Firecrawl HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: FIRECRAWL_API_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl BaseWebScraper for FirecrawlClient {
    async fn scrape(&self, url: &str) -> Result<ScrapeResult> {
        let api_key = self
            .api_key
            .as_deref()
            .context("FIRECRAWL_API_KEY is not configured")?;

        let response = self
            .client
            .post(format!("{}/v1/scrape", self.base_url))
            .bearer_auth(api_key)
            .json(&ScrapeRequest {
                url,
                formats: ["markdown"],
            })
            .send()
            .await
            .context("Firecrawl request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Firecrawl scrape failed ({}): {}", status, body);
        }

        let result: ScrapeResponse = response
            .json()
            .await
            .context("Failed to parse Firecrawl response")?;

        if !result.success {
            bail!(
                "Firecrawl scrape unsuccessful: {}",
                result.error.unwrap_or_else(|| "no error detail".to_string())
            );
        }

        let data = result.data.context("No data returned from Firecrawl")?;
        let markdown = data
            .markdown
            .context("No markdown content returned from Firecrawl")?;

        Ok(ScrapeResult {
            url: url.to_string(),
            markdown,
            title: data.metadata.and_then(|m| m.title),
        })
    }
}
