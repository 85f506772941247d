use serde::{Deserialize, Serialize};

/// The single record threaded through every step of one run.
///
/// Every field is optional: a step that cannot produce its output leaves the
/// field absent and downstream steps treat absence as "nothing to do".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowState {
    pub url: Option<String>,
    /// 1-based spreadsheet row the URL lives in
    pub sheet_row_index: Option<u32>,
    pub scraped_content: Option<String>,
    pub summary: Option<String>,
    pub generated_post: Option<String>,
    pub publish_status: Option<String>,
    pub user_approval: Option<bool>,
    pub user_context: Option<String>,
}

impl WorkflowState {
    /// State for the whole chain, with an optional caller-supplied URL.
    /// Blank URLs count as absent.
    pub fn for_url(url: Option<String>) -> Self {
        Self {
            url: url.filter(|u| !u.trim().is_empty()),
            ..Default::default()
        }
    }

    /// State for the review flow, seeded with free-form context.
    pub fn for_context(user_context: impl Into<String>) -> Self {
        Self {
            user_context: Some(user_context.into()),
            ..Default::default()
        }
    }

    pub fn has_url(&self) -> bool {
        non_empty(&self.url).is_some()
    }

    /// The generated post, if there is any text to publish.
    pub fn post_text(&self) -> Option<&str> {
        non_empty(&self.generated_post)
    }
}

/// `Some(text)` only when the field holds non-whitespace text.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Partial update returned by a step.
///
/// Outer `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    url: Option<Option<String>>,
    sheet_row_index: Option<Option<u32>>,
    scraped_content: Option<Option<String>>,
    summary: Option<Option<String>>,
    generated_post: Option<Option<String>>,
    publish_status: Option<Option<String>>,
}

impl StateUpdate {
    /// An update that changes nothing.
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: Option<String>) -> Self {
        self.url = Some(url);
        self
    }

    pub fn sheet_row_index(mut self, row: Option<u32>) -> Self {
        self.sheet_row_index = Some(row);
        self
    }

    pub fn scraped_content(mut self, content: Option<String>) -> Self {
        self.scraped_content = Some(content);
        self
    }

    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn generated_post(mut self, post: Option<String>) -> Self {
        self.generated_post = Some(post);
        self
    }

    pub fn publish_status(mut self, status: Option<String>) -> Self {
        self.publish_status = Some(status);
        self
    }

    pub fn is_unchanged(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `state`, overwriting only the fields this update sets.
    pub fn apply(self, state: &mut WorkflowState) {
        if let Some(url) = self.url {
            state.url = url;
        }
        if let Some(row) = self.sheet_row_index {
            state.sheet_row_index = row;
        }
        if let Some(content) = self.scraped_content {
            state.scraped_content = content;
        }
        if let Some(summary) = self.summary {
            state.summary = summary;
        }
        if let Some(post) = self.generated_post {
            state.generated_post = post;
        }
        if let Some(status) = self.publish_status {
            state.publish_status = status;
        }
    }
}
