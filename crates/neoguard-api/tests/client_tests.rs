use neoguard_api::{ApiError, MediaClient, MediaConfig};
use neoguard_domain::{AnalysisRequest, MediaType};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MediaClient {
    MediaClient::new(MediaConfig::new(server.uri()))
}

fn keyed_client_for(server: &MockServer) -> MediaClient {
    MediaClient::new(MediaConfig::new(server.uri()).with_api_key("test-token"))
}

fn verdict_response() -> serde_json::Value {
    serde_json::json!({
        "is_fake": true,
        "confidence": 0.93,
        "media_type": "image",
        "filename": "sample.png",
        "heatmap": "/heatmaps/sample.png"
    })
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[tokio::test]
async fn test_analyze_file_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(verdict_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .analyze_file("sample.png", b"0123456789".to_vec())
        .await
        .unwrap();

    assert!(result.is_fake);
    assert_eq!(result.confidence, 0.93);
    assert_eq!(result.media_type, MediaType::Image);
    assert_eq!(result.media_url, "/uploads/sample.png");
    assert_eq!(result.heatmap_url.as_deref(), Some("/heatmaps/sample.png"));
}

#[tokio::test]
async fn test_analyze_file_sends_multipart_field_and_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(verdict_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .analyze_file("sample.png", b"0123456789".to_vec())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {}",
        content_type
    );

    let body = &requests[0].body;
    assert!(contains_subslice(body, b"name=\"file\""));
    assert!(contains_subslice(body, b"filename=\"sample.png\""));
    assert!(contains_subslice(body, b"0123456789"));
}

#[tokio::test]
async fn test_analyze_url_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-url"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"url": "https://example.com/img.jpg"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "is_fake": false,
            "confidence": 0.12,
            "media_type": "image",
            "media_url": "https://example.com/img.jpg"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.analyze_url("https://example.com/img.jpg").await.unwrap();

    assert!(!result.is_fake);
    assert_eq!(result.media_url, "https://example.com/img.jpg");
}

#[tokio::test]
async fn test_server_error_message_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "internal error"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .analyze_file("sample.png", b"bytes".to_vec())
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_uses_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-url"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.analyze_url("https://example.com/x.jpg").await.unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API request failed");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bearer_header_present_when_key_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze-url"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(verdict_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = keyed_client_for(&mock_server);
    client.analyze_url("https://example.com/x.jpg").await.unwrap();
}

#[tokio::test]
async fn test_no_auth_header_without_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(verdict_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.analyze_url("https://example.com/x.jpg").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_invalid_request_never_reaches_the_network() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);

    let err = client.analyze(AnalysisRequest::url("   ")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));

    let err = client.analyze(AnalysisRequest::file("x.png", vec![])).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "validation failures must not send requests");
}

#[tokio::test]
async fn test_batch_analyze_uses_indexed_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/batch-analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"filename": "a.png"}, {"filename": "b.png"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client
        .batch_analyze(vec![
            ("a.png".to_string(), b"aaaa".to_vec()),
            ("b.png".to_string(), b"bbbb".to_vec()),
        ])
        .await
        .unwrap();

    assert_eq!(value["results"][1]["filename"], "b.png");

    let requests = mock_server.received_requests().await.unwrap();
    let body = &requests[0].body;
    assert!(contains_subslice(body, b"name=\"file_0\""));
    assert!(contains_subslice(body, b"name=\"file_1\""));
    assert!(contains_subslice(body, b"filename=\"a.png\""));
    assert!(contains_subslice(body, b"filename=\"b.png\""));
}

#[tokio::test]
async fn test_batch_analyze_rejects_empty_input() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.batch_analyze(vec![]).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_history_and_report_pass_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "analyses": [{"id": "r-1"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/report/r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "r-1",
            "is_fake": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let history = client.history().await.unwrap();
    assert_eq!(history["analyses"][0]["id"], "r-1");

    let report = client.report("r-1").await.unwrap();
    assert_eq!(report["id"], "r-1");
}

#[tokio::test]
async fn test_undecodable_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.analyze_url("https://example.com/x.jpg").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    // Nothing listens on this port
    let mut config = MediaConfig::new("http://127.0.0.1:9");
    config.timeout_secs = 2;
    let client = MediaClient::new(config);

    let err = client.analyze_url("https://example.com/x.jpg").await.unwrap_err();
    assert!(matches!(err, ApiError::Connection(_)));
}
