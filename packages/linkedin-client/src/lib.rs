//! Pure LinkedIn REST client.
//!
//! Publishes text shares through the UGC posts API.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_client::{AuthorUrn, LinkedInClient};
//!
//! let client = LinkedInClient::new(access_token);
//! let id = client
//!     .create_text_post(&AuthorUrn::Person(person_id), "THEY WHISPER BACK.")
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{LinkedInError, Result};
pub use types::{AuthorUrn, CreatedPost, UgcPost};

const BASE_URL: &str = "https://api.linkedin.com";

/// Header carrying the created entity URN on Rest.li 2.0 responses.
const RESTLI_ID_HEADER: &str = "x-restli-id";

#[derive(Clone)]
pub struct LinkedInClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl LinkedInClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Publish a public text-only post. Returns the created post URN, or
    /// `"N/A"` when LinkedIn accepted the post without echoing an id.
    pub async fn create_text_post(&self, author: &AuthorUrn, text: &str) -> Result<String> {
        let body = UgcPost::text(author, text);

        let url = format!("{}/v2/ugcPosts", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %message, "LinkedIn rejected post");
            return Err(LinkedInError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let header_id = resp
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Some API versions reply 201 with an empty body.
        let bytes = resp.bytes().await?;
        let created: CreatedPost = serde_json::from_slice(&bytes).unwrap_or_default();

        let id = header_id
            .or(created.id)
            .unwrap_or_else(|| "N/A".to_string());
        tracing::info!(post_id = %id, "LinkedIn post created");

        Ok(id)
    }
}
