use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkedInError>;

#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("LinkedIn API error ({status}): {message}")]
    Api { status: u16, message: String },
}
