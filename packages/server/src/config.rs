use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;

use crate::domains::agent::models::Network;

/// Which routes the front door exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    /// `/`, `/run-agent`, `/generate`, `/post`
    Full,
    /// `/` and `/run-agent` only
    Minimal,
}

impl FromStr for ServerMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ServerMode::Full),
            "minimal" => Ok(ServerMode::Minimal),
            other => Err(anyhow!("unknown server mode '{}' (expected full|minimal)", other)),
        }
    }
}

/// Where generated content is tracked.
#[derive(Debug, Clone)]
pub struct SheetSettings {
    /// Spreadsheet title, resolved through Drive
    pub sheet_name: String,
    /// Header of the column holding article links
    pub link_column: String,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            sheet_name: "News Media Links".to_string(),
            link_column: "Media Links".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub server_mode: ServerMode,
    pub allowed_origins: Vec<String>,

    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,

    pub firecrawl_api_key: Option<String>,

    pub google_service_account_file: PathBuf,
    pub google_sheets_access_token: Option<String>,
    pub sheet: SheetSettings,

    pub publish_network: Network,
    pub linkedin_access_token: Option<String>,
    pub linkedin_person_id: Option<String>,
    pub linkedin_organization_id: Option<String>,
    pub x_access_token: Option<String>,

    /// Unset means stored drafts never expire
    pub conversation_ttl: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let sheet_defaults = SheetSettings::default();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            server_mode: env::var("SERVER_MODE")
                .unwrap_or_else(|_| "full".to_string())
                .parse()
                .context("SERVER_MODE must be full or minimal")?,
            allowed_origins: parse_list(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ),
            llm_api_key: env::var("LLM_API_KEY")
                .or_else(|_| env::var("GOOGLE_API_KEY"))
                .context("LLM_API_KEY (or GOOGLE_API_KEY) must be set")?,
            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| openai_client::GEMINI_BASE_URL.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            firecrawl_api_key: non_empty_var("FIRECRAWL_API_KEY"),
            google_service_account_file: env::var("GOOGLE_SERVICE_ACCOUNT_FILE")
                .unwrap_or_else(|_| "credentials.json".to_string())
                .into(),
            google_sheets_access_token: non_empty_var("GOOGLE_SHEETS_ACCESS_TOKEN"),
            sheet: SheetSettings {
                sheet_name: env::var("SHEET_NAME").unwrap_or(sheet_defaults.sheet_name),
                link_column: env::var("SHEET_LINK_COLUMN").unwrap_or(sheet_defaults.link_column),
            },
            publish_network: env::var("PUBLISH_NETWORK")
                .unwrap_or_else(|_| "linkedin".to_string())
                .parse()
                .context("PUBLISH_NETWORK must be linkedin or x")?,
            linkedin_access_token: non_empty_var("LINKEDIN_ACCESS_TOKEN"),
            linkedin_person_id: non_empty_var("LINKEDIN_PERSON_ID"),
            linkedin_organization_id: non_empty_var("LINKEDIN_ORGANIZATION_ID"),
            x_access_token: non_empty_var("X_ACCESS_TOKEN"),
            conversation_ttl: non_empty_var("CONVERSATION_TTL_SECS")
                .map(|v| v.parse::<u64>().map(Duration::from_secs))
                .transpose()
                .context("CONVERSATION_TTL_SECS must be a number of seconds")?,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_mode_parse() {
        assert_eq!("full".parse::<ServerMode>().unwrap(), ServerMode::Full);
        assert_eq!(" Minimal ".parse::<ServerMode>().unwrap(), ServerMode::Minimal);
        assert!("both".parse::<ServerMode>().is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list("http://localhost:5173, https://app.example.com,,"),
            vec!["http://localhost:5173", "https://app.example.com"]
        );
        assert!(parse_list("").is_empty());
    }
}
