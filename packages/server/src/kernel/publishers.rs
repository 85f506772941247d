// Social network implementations of BasePublisher
//
// Credentials are optional at construction time. A publisher without them
// reports MissingCredentials on every call without touching the network.

use async_trait::async_trait;
use linkedin_client::{AuthorUrn, LinkedInClient, LinkedInError};
use x_client::{XClient, XError, MAX_POST_CHARS};

use super::{BasePublisher, PublishError};

// =============================================================================
// LinkedIn
// =============================================================================

pub struct LinkedInPublisher {
    client: Option<LinkedInClient>,
    author: Option<AuthorUrn>,
}

impl LinkedInPublisher {
    pub fn new(client: Option<LinkedInClient>, author: Option<AuthorUrn>) -> Self {
        Self { client, author }
    }

    /// Posts as the organization when one is configured, else as the person.
    pub fn from_credentials(
        access_token: Option<&str>,
        person_id: Option<&str>,
        organization_id: Option<&str>,
    ) -> Self {
        let author = organization_id
            .map(|id| AuthorUrn::Organization(id.to_string()))
            .or_else(|| person_id.map(|id| AuthorUrn::Person(id.to_string())));

        Self::new(access_token.map(LinkedInClient::new), author)
    }
}

impl From<LinkedInError> for PublishError {
    fn from(err: LinkedInError) -> Self {
        match err {
            LinkedInError::Api { status, message } => PublishError::Api {
                status,
                body: message,
            },
            other => PublishError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl BasePublisher for LinkedInPublisher {
    async fn publish(&self, text: &str) -> Result<String, PublishError> {
        let (Some(client), Some(author)) = (&self.client, &self.author) else {
            tracing::warn!("LinkedIn access token or author id not configured");
            return Err(PublishError::MissingCredentials);
        };

        tracing::info!(author = %author, chars = text.chars().count(), "Publishing to LinkedIn");
        let id = client.create_text_post(author, text).await?;
        Ok(id)
    }
}

// =============================================================================
// X
// =============================================================================

pub struct XPublisher {
    client: Option<XClient>,
}

impl XPublisher {
    pub fn new(client: Option<XClient>) -> Self {
        Self { client }
    }

    pub fn from_credentials(access_token: Option<&str>) -> Self {
        Self::new(access_token.map(XClient::new))
    }
}

impl From<XError> for PublishError {
    fn from(err: XError) -> Self {
        match err {
            XError::Api { status, message } => PublishError::Api {
                status,
                body: message,
            },
            other => PublishError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl BasePublisher for XPublisher {
    async fn publish(&self, text: &str) -> Result<String, PublishError> {
        let Some(client) = &self.client else {
            tracing::warn!("X access token not configured");
            return Err(PublishError::MissingCredentials);
        };

        let chars = text.chars().count();
        if chars > MAX_POST_CHARS {
            // Sent as-is; X decides whether to reject it.
            tracing::warn!(chars, limit = MAX_POST_CHARS, "Post exceeds X character limit");
        }

        tracing::info!(chars, "Publishing to X");
        let id = client.create_tweet(text).await?;
        Ok(id)
    }
}
