//! Spreadsheet activities: record a supplied link, pick up the latest link,
//! and write the run's outcome back to its row.
//!
//! Spreadsheet failures never abort a run. They are logged and surface as
//! absent fields.

use tracing::{info, warn};

use crate::domains::agent::models::{non_empty, StateUpdate, WorkflowState};
use crate::kernel::ServerDeps;

/// Append the caller's URL to the link column and remember its row.
pub async fn add_url_to_sheet(state: &WorkflowState, deps: &ServerDeps) -> StateUpdate {
    let Some(url) = non_empty(&state.url) else {
        warn!("No URL provided to add to sheet");
        return StateUpdate::unchanged().url(None).sheet_row_index(None);
    };

    match deps
        .sheets
        .append_link(&deps.sheet.sheet_name, &deps.sheet.link_column, url)
        .await
    {
        Ok(row) => {
            info!(url, row, "Added URL to sheet");
            StateUpdate::unchanged().sheet_row_index(Some(row))
        }
        Err(e) => {
            warn!(url, error = %format!("{:#}", e), "Failed to add URL to sheet");
            StateUpdate::unchanged().url(None).sheet_row_index(None)
        }
    }
}

/// Take the last link in the link column as this run's article.
pub async fn fetch_link(deps: &ServerDeps) -> StateUpdate {
    let link = deps
        .sheets
        .latest_link(&deps.sheet.sheet_name, &deps.sheet.link_column)
        .await
        .unwrap_or_else(|e| {
            warn!(
                sheet = %deps.sheet.sheet_name,
                error = %format!("{:#}", e),
                "Failed to read links from sheet"
            );
            None
        });

    match link {
        Some(link) => {
            info!(url = %link.url, row = link.row_index, "Fetched article link");
            StateUpdate::unchanged()
                .url(Some(link.url))
                .sheet_row_index(Some(link.row_index))
        }
        None => {
            info!(sheet = %deps.sheet.sheet_name, "No article link found");
            StateUpdate::unchanged().url(None).sheet_row_index(None)
        }
    }
}

/// Write the post and its publish status into the run's row.
///
/// Requires both a row index and post text; otherwise nothing is written.
pub async fn update_sheet(state: &WorkflowState, deps: &ServerDeps) -> StateUpdate {
    let (Some(row), Some(post)) = (state.sheet_row_index, state.post_text()) else {
        info!("Skipping sheet update, row or post missing");
        return StateUpdate::unchanged();
    };

    let fields = vec![
        (deps.network.content_column().to_string(), post.to_string()),
        (
            deps.network.status_column().to_string(),
            state.publish_status.clone().unwrap_or_default(),
        ),
    ];

    match deps
        .sheets
        .update_row(&deps.sheet.sheet_name, row, &fields)
        .await
    {
        Ok(()) => info!(row, "Sheet row updated"),
        Err(e) => warn!(row, error = %format!("{:#}", e), "Failed to update sheet"),
    }

    StateUpdate::unchanged()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::MockSpreadsheet;
    use crate::kernel::TestDependencies;

    #[tokio::test]
    async fn test_add_url_records_appended_row() {
        let test_deps = TestDependencies::new().mock_sheets(
            MockSpreadsheet::with_default_headers()
                .with_row(&["https://example.com/1"])
                .with_row(&["https://example.com/2"]),
        );
        let deps = test_deps.into_deps();

        let mut state = WorkflowState::for_url(Some("https://example.com/a".into()));
        add_url_to_sheet(&state, &deps).await.apply(&mut state);

        assert_eq!(state.sheet_row_index, Some(4));
        assert_eq!(state.url.as_deref(), Some("https://example.com/a"));
        assert_eq!(test_deps.sheets.append_calls(), vec!["https://example.com/a"]);
    }

    #[tokio::test]
    async fn test_add_url_failure_clears_url() {
        let test_deps = TestDependencies::new().mock_sheets(MockSpreadsheet::new().failing());
        let deps = test_deps.into_deps();

        let mut state = WorkflowState::for_url(Some("https://example.com/a".into()));
        add_url_to_sheet(&state, &deps).await.apply(&mut state);

        assert_eq!(state.url, None);
        assert_eq!(state.sheet_row_index, None);
    }

    #[tokio::test]
    async fn test_fetch_link_on_unreachable_sheet_is_absent() {
        let test_deps = TestDependencies::new().mock_sheets(MockSpreadsheet::new().failing());
        let deps = test_deps.into_deps();

        let mut state = WorkflowState::default();
        fetch_link(&deps).await.apply(&mut state);

        assert_eq!(state.url, None);
        assert_eq!(state.sheet_row_index, None);
    }

    #[tokio::test]
    async fn test_update_sheet_requires_row_and_post() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.into_deps();

        let state = WorkflowState {
            generated_post: Some("HOOK.".into()),
            ..Default::default()
        };
        assert!(update_sheet(&state, &deps).await.is_unchanged());
        assert!(test_deps.sheets.update_calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_sheet_twice_is_idempotent() {
        let test_deps = TestDependencies::new().mock_sheets(
            MockSpreadsheet::with_default_headers().with_row(&["https://example.com/a"]),
        );
        let deps = test_deps.into_deps();

        let state = WorkflowState {
            sheet_row_index: Some(2),
            generated_post: Some("HOOK.".into()),
            publish_status: Some("Post successful (id: urn:li:share:1)".into()),
            ..Default::default()
        };

        update_sheet(&state, &deps).await;
        let first = (
            test_deps.sheets.cell(2, "LinkedIn Content"),
            test_deps.sheets.cell(2, "LinkedIn Status"),
        );
        update_sheet(&state, &deps).await;
        let second = (
            test_deps.sheets.cell(2, "LinkedIn Content"),
            test_deps.sheets.cell(2, "LinkedIn Status"),
        );

        assert_eq!(first, second);
        assert_eq!(first.0.as_deref(), Some("HOOK."));
        assert_eq!(test_deps.sheets.update_calls().len(), 2);
    }
}
