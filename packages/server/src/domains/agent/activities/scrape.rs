use tracing::{info, warn};

use crate::domains::agent::models::{non_empty, StateUpdate, WorkflowState};
use crate::kernel::ServerDeps;

/// Fetch the article behind `state.url` as markdown. One attempt; any
/// failure leaves the content absent.
pub async fn scrape_article(state: &WorkflowState, deps: &ServerDeps) -> StateUpdate {
    let Some(url) = non_empty(&state.url) else {
        return StateUpdate::unchanged().scraped_content(None);
    };

    info!(url, "Scraping article");
    let content = match deps.scraper.scrape(url).await {
        Ok(result) if !result.markdown.trim().is_empty() => {
            info!(url, chars = result.markdown.len(), "Scrape successful");
            Some(result.markdown)
        }
        Ok(_) => {
            warn!(url, "Scrape returned no content");
            None
        }
        Err(e) => {
            warn!(url, error = %format!("{:#}", e), "Scrape failed");
            None
        }
    };

    StateUpdate::unchanged().scraped_content(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::MockWebScraper;
    use crate::kernel::TestDependencies;

    #[tokio::test]
    async fn test_no_url_skips_scraper() {
        let test_deps = TestDependencies::new();
        let mut state = WorkflowState::default();

        scrape_article(&state, &test_deps.into_deps())
            .await
            .apply(&mut state);

        assert_eq!(state.scraped_content, None);
        assert!(test_deps.scraper.scrape_calls().is_empty());
    }

    #[tokio::test]
    async fn test_scrape_error_is_absent() {
        let test_deps =
            TestDependencies::new().mock_scraper(MockWebScraper::new().with_error("timeout"));
        let mut state = WorkflowState::for_url(Some("https://example.com/a".into()));

        scrape_article(&state, &test_deps.into_deps())
            .await
            .apply(&mut state);

        assert_eq!(state.scraped_content, None);
        assert!(test_deps.scraper.was_scraped("https://example.com/a"));
    }
}
