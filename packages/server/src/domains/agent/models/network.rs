use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Social network a post is written for and published to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Long-form, 150-250 words
    #[default]
    LinkedIn,
    /// Short-form, under 280 characters
    X,
}

impl Network {
    /// Spreadsheet header of the column receiving the generated post.
    pub fn content_column(&self) -> &'static str {
        match self {
            Network::LinkedIn => "LinkedIn Content",
            Network::X => "Twitter Content",
        }
    }

    /// Spreadsheet header of the column receiving the publish status.
    pub fn status_column(&self) -> &'static str {
        match self {
            Network::LinkedIn => "LinkedIn Status",
            Network::X => "Twitter Status",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::LinkedIn => write!(f, "linkedin"),
            Network::X => write!(f, "x"),
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Ok(Network::LinkedIn),
            "x" | "twitter" => Ok(Network::X),
            other => Err(anyhow!("unknown network '{}' (expected linkedin|x)", other)),
        }
    }
}
