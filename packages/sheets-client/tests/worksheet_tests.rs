//! Worksheet operations against a wiremock server standing in for Sheets and Drive.

use serde_json::json;
use sheets_client::{Credentials, SheetsClient, SheetsError};
use wiremock::matchers::{body_partial_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_open(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(header("authorization", "Bearer ya29.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{"id": "sheet-123", "name": "News Media Links"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/sheet-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sheets": [
                {"properties": {"title": "Archive", "index": 1}},
                {"properties": {"title": "Sheet1", "index": 0}}
            ]
        })))
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> SheetsClient {
    SheetsClient::new(Credentials::AccessToken("ya29.test".into())).with_base_url(server.uri())
}

#[tokio::test]
async fn open_resolves_title_to_first_worksheet() {
    let server = MockServer::start().await;
    mount_open(&server).await;

    let sheet = client(&server).open("News Media Links").await.unwrap();

    assert_eq!(sheet.spreadsheet_id(), "sheet-123");
    assert_eq!(sheet.title(), "Sheet1");
}

#[tokio::test]
async fn open_unknown_title_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .mount(&server)
        .await;

    let err = client(&server).open("Missing").await.unwrap_err();
    assert!(matches!(err, SheetsError::SpreadsheetNotFound(name) if name == "Missing"));
}

#[tokio::test]
async fn reads_header_and_column_values() {
    let server = MockServer::start().await;
    mount_open(&server).await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/.*1:1$"))
        .and(query_param("majorDimension", "ROWS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1!A1:C1",
            "majorDimension": "ROWS",
            "values": [["Media Links", "LinkedIn Content", "LinkedIn Status"]]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/.*A:A$"))
        .and(query_param("majorDimension", "COLUMNS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1!A1:A3",
            "majorDimension": "COLUMNS",
            "values": [["Media Links", "https://example.com/a", "https://example.com/b"]]
        })))
        .mount(&server)
        .await;

    let sheet = client(&server).open("News Media Links").await.unwrap();
    let col = sheet.find_header("Media Links").await.unwrap();
    assert_eq!(col, Some(1));
    assert_eq!(sheet.find_header("Twitter Status").await.unwrap(), None);

    let links = sheet.col_values(1).await.unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links.last().unwrap(), "https://example.com/b");
}

#[tokio::test]
async fn append_returns_written_row() {
    let server = MockServer::start().await;
    mount_open(&server).await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/.*A:A:append$"))
        .and(query_param("valueInputOption", "RAW"))
        .and(query_param("insertDataOption", "INSERT_ROWS"))
        .and(body_partial_json(json!({"values": [["https://example.com/a"]]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "sheet-123",
            "updates": {"updatedRange": "Sheet1!A7", "updatedCells": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sheet = client(&server).open("News Media Links").await.unwrap();
    let row = sheet
        .append_to_column(1, "https://example.com/a")
        .await
        .unwrap();

    assert_eq!(row, 7);
}

#[tokio::test]
async fn update_cell_overwrites_single_cell() {
    let server = MockServer::start().await;
    mount_open(&server).await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/v4/spreadsheets/sheet-123/values/.*C7$"))
        .and(query_param("valueInputOption", "RAW"))
        .and(body_partial_json(json!({"values": [["Post successful (id: urn:li:share:1)"]]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spreadsheetId": "sheet-123",
            "updatedRange": "Sheet1!C7",
            "updatedCells": 1
        })))
        .expect(2)
        .mount(&server)
        .await;

    let sheet = client(&server).open("News Media Links").await.unwrap();
    for _ in 0..2 {
        sheet
            .update_cell(7, 3, "Post successful (id: urn:li:share:1)")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn api_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(403).set_body_string("insufficient scopes"))
        .mount(&server)
        .await;

    let err = client(&server).open("News Media Links").await.unwrap_err();
    assert!(matches!(err, SheetsError::Api { status: 403, .. }));
}
