use std::fmt;

use serde::{Deserialize, Serialize};

/// Who a post is published as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorUrn {
    Person(String),
    Organization(String),
}

impl fmt::Display for AuthorUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorUrn::Person(id) => write!(f, "urn:li:person:{}", id),
            AuthorUrn::Organization(id) => write!(f, "urn:li:organization:{}", id),
        }
    }
}

/// Body of `POST /v2/ugcPosts` for a text-only share.
#[derive(Debug, Clone, Serialize)]
pub struct UgcPost {
    pub author: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: String,
    #[serde(rename = "specificContent")]
    pub specific_content: SpecificContent,
    pub visibility: MemberNetworkVisibility,
}

impl UgcPost {
    /// A published text share visible to anyone on LinkedIn.
    pub fn text(author: &AuthorUrn, text: impl Into<String>) -> Self {
        Self {
            author: author.to_string(),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text: text.into() },
                    share_media_category: "NONE".to_string(),
                },
            },
            visibility: MemberNetworkVisibility {
                visibility: "PUBLIC".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareContent {
    #[serde(rename = "shareCommentary")]
    pub share_commentary: ShareCommentary,
    #[serde(rename = "shareMediaCategory")]
    pub share_media_category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberNetworkVisibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub visibility: String,
}

/// Response body of a successful post creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedPost {
    pub id: Option<String>,
}
