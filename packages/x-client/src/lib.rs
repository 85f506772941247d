//! Pure X (Twitter) API v2 client.
//!
//! Only post creation is covered. Requests are authorised with an OAuth 2.0
//! user-context access token (`tweet.write` scope).

pub mod error;
pub mod types;

pub use error::{Result, XError};
pub use types::{CreateTweet, CreateTweetResponse, TweetData};

const BASE_URL: &str = "https://api.twitter.com";

/// Hard limit X enforces on post text for standard accounts.
pub const MAX_POST_CHARS: usize = 280;

#[derive(Clone)]
pub struct XClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl XClient {
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

    /// Create a post. Returns the new post id.
    pub async fn create_tweet(&self, text: &str) -> Result<String> {
        let url = format!("{}/2/tweets", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&CreateTweet {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %message, "X rejected post");
            return Err(XError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CreateTweetResponse = resp.json().await?;
        let data = body
            .data
            .ok_or_else(|| XError::Parse("response has no data object".into()))?;
        tracing::info!(post_id = %data.id, "X post created");

        Ok(data.id)
    }
}
