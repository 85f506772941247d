//! End-to-end tests for `/run-agent`.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use social_agent::domains::agent::Network;
use social_agent::kernel::test_dependencies::{
    MockAI, MockPublisher, MockSpreadsheet, MockWebScraper,
};
use social_agent::kernel::{PublishError, TestDependencies};

use common::TestHarness;

#[tokio::test]
async fn supplied_url_runs_whole_chain_and_writes_back() {
    let deps = TestDependencies::new()
        .mock_sheets(MockSpreadsheet::with_default_headers().with_row(&["https://example.com/old"]))
        .mock_scraper(MockWebScraper::new().with_response("# Agents\n\nThey whisper back."))
        .mock_ai(
            MockAI::new()
                .with_response("Agents act on their own.")
                .with_response("THEY DON'T JUST FOLLOW ORDERS."),
        )
        .mock_publisher(MockPublisher::new().with_id("urn:li:share:42"));
    let harness = TestHarness::with_deps(deps);

    let (status, body) = harness
        .post_json("/run-agent", json!({"url": "https://example.com/a"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Agent workflow completed.");

    let state = &body["final_state"];
    assert_eq!(state["url"], "https://example.com/a");
    assert_eq!(state["sheet_row_index"], 3);
    assert_eq!(state["scraped_content"], "# Agents\n\nThey whisper back.");
    assert_eq!(state["summary"], "Agents act on their own.");
    assert_eq!(state["generated_post"], "THEY DON'T JUST FOLLOW ORDERS.");
    assert_eq!(state["publish_status"], "Post successful (id: urn:li:share:42)");

    let sheets = &harness.deps.sheets;
    assert_eq!(sheets.fetch_count(), 0);
    assert_eq!(sheets.append_calls(), vec!["https://example.com/a"]);
    assert_eq!(
        sheets.cell(3, "LinkedIn Content").as_deref(),
        Some("THEY DON'T JUST FOLLOW ORDERS.")
    );
    assert_eq!(
        sheets.cell(3, "LinkedIn Status").as_deref(),
        Some("Post successful (id: urn:li:share:42)")
    );
    assert_eq!(
        harness.deps.publisher.calls(),
        vec!["THEY DON'T JUST FOLLOW ORDERS."]
    );
}

#[tokio::test]
async fn missing_url_uses_latest_sheet_link() {
    let deps = TestDependencies::new().mock_sheets(
        MockSpreadsheet::with_default_headers()
            .with_row(&["https://example.com/1"])
            .with_row(&["https://example.com/2"]),
    );
    let harness = TestHarness::with_deps(deps);

    let (status, body) = harness.post_json("/run-agent", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["final_state"]["url"], "https://example.com/2");
    assert_eq!(body["final_state"]["sheet_row_index"], 3);
    assert!(harness.deps.scraper.was_scraped("https://example.com/2"));
    assert!(harness.deps.sheets.append_calls().is_empty());
    assert_eq!(
        harness.deps.sheets.cell(3, "LinkedIn Content").as_deref(),
        Some("Mock AI response")
    );
}

#[tokio::test]
async fn empty_url_counts_as_absent() {
    let harness = TestHarness::new();

    let (status, _) = harness.post_json("/run-agent", json!({"url": ""})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(harness.deps.sheets.append_calls().is_empty());
    assert_eq!(harness.deps.sheets.fetch_count(), 1);
}

#[tokio::test]
async fn empty_sheet_degrades_without_publishing() {
    let harness = TestHarness::new();

    let (status, body) = harness.post_json("/run-agent", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let state = &body["final_state"];
    for field in [
        "url",
        "sheet_row_index",
        "scraped_content",
        "summary",
        "generated_post",
    ] {
        assert!(state[field].is_null(), "{field} should be absent");
    }
    assert_eq!(state["publish_status"], "Skipped");

    assert!(harness.deps.scraper.scrape_calls().is_empty());
    assert_eq!(harness.deps.ai.call_count(), 0);
    assert_eq!(harness.deps.publisher.call_count(), 0);
    assert!(harness.deps.sheets.update_calls().is_empty());
}

#[tokio::test]
async fn publish_failure_is_recorded_in_sheet() {
    let deps = TestDependencies::new().mock_publisher(
        MockPublisher::new().with_error(PublishError::Transport("connection reset by peer".into())),
    );
    let harness = TestHarness::with_deps(deps);

    let (status, body) = harness
        .post_json("/run-agent", json!({"url": "https://example.com/a"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    let expected = "Post failed: connection reset by peer";
    assert_eq!(body["final_state"]["publish_status"], expected);

    let row = body["final_state"]["sheet_row_index"].as_u64().unwrap() as u32;
    assert_eq!(
        harness.deps.sheets.cell(row, "LinkedIn Status").as_deref(),
        Some(expected)
    );
}

#[tokio::test]
async fn scrape_failure_skips_language_model() {
    let deps = TestDependencies::new().mock_scraper(MockWebScraper::new().with_error("HTTP 404"));
    let harness = TestHarness::with_deps(deps);

    let (status, body) = harness
        .post_json("/run-agent", json!({"url": "https://example.com/gone"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["final_state"]["scraped_content"].is_null());
    assert!(body["final_state"]["generated_post"].is_null());
    assert_eq!(harness.deps.ai.call_count(), 0);
    assert_eq!(harness.deps.publisher.call_count(), 0);
}

#[tokio::test]
async fn language_model_failure_is_server_error() {
    let deps = TestDependencies::new().mock_ai(MockAI::new().with_error("quota exceeded"));
    let harness = TestHarness::with_deps(deps);

    let (status, body) = harness
        .post_json("/run-agent", json!({"url": "https://example.com/a"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("quota exceeded"));
    assert_eq!(harness.deps.publisher.call_count(), 0);
}

#[tokio::test]
async fn x_network_writes_twitter_columns() {
    let deps = TestDependencies::new()
        .network(Network::X)
        .mock_ai(MockAI::new().with_response("summary").with_response("TRUST IS FRAGILE."));
    let harness = TestHarness::with_deps(deps);

    let (_, body) = harness
        .post_json("/run-agent", json!({"url": "https://example.com/a"}))
        .await;

    let row = body["final_state"]["sheet_row_index"].as_u64().unwrap() as u32;
    let sheets = &harness.deps.sheets;
    assert_eq!(sheets.cell(row, "Twitter Content").as_deref(), Some("TRUST IS FRAGILE."));
    assert_eq!(sheets.cell(row, "LinkedIn Content"), None);
    assert!(harness.deps.ai.calls()[1]
        .system
        .as_deref()
        .unwrap()
        .contains("Twitter (X)"));
}
