use std::fmt;

/// Outcome of a publish attempt, carried as data rather than as an error.
///
/// The rendered string is what lands in `WorkflowState::publish_status`,
/// the HTTP responses and the spreadsheet status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStatus {
    Posted { id: String },
    Failed(String),
    MissingCredentials,
    /// Nothing to publish
    Skipped,
    Cancelled,
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStatus::Posted { id } => write!(f, "Post successful (id: {})", id),
            PublishStatus::Failed(reason) => write!(f, "Post failed: {}", reason),
            PublishStatus::MissingCredentials => write!(f, "Post failed: Missing credentials."),
            PublishStatus::Skipped => write!(f, "Skipped"),
            PublishStatus::Cancelled => write!(f, "Post cancelled by user."),
        }
    }
}

impl From<PublishStatus> for String {
    fn from(status: PublishStatus) -> Self {
        status.to_string()
    }
}
