use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use x_client::{XClient, XError};

#[tokio::test]
async fn creates_post_and_returns_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(header("authorization", "Bearer x-token"))
        .and(body_json(json!({"text": "TRUST IS FRAGILE."})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "1445880548472328192", "text": "TRUST IS FRAGILE."}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = XClient::new("x-token").with_base_url(server.uri());
    let id = client.create_tweet("TRUST IS FRAGILE.").await.unwrap();

    assert_eq!(id, "1445880548472328192");
}

#[tokio::test]
async fn forbidden_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(403).set_body_string("duplicate content"))
        .mount(&server)
        .await;

    let client = XClient::new("x-token").with_base_url(server.uri());
    let err = client.create_tweet("again").await.unwrap_err();

    match err {
        XError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "duplicate content");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_data_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errors": []})))
        .mount(&server)
        .await;

    let client = XClient::new("x-token").with_base_url(server.uri());
    let err = client.create_tweet("hello").await.unwrap_err();

    assert!(matches!(err, XError::Parse(_)));
}
