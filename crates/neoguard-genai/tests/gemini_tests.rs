use neoguard_domain::TextGenerator;
use neoguard_genai::{GeminiClient, GeminiConfig, GenerationError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    let mut config = GeminiConfig::new("test-key");
    config.api_base_url = server.uri();
    GeminiClient::new(config)
}

fn generate_content_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [{"text": text}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ]
    })
}

#[tokio::test]
async fn test_generate_returns_first_candidate_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(generate_content_response("Generated reply")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = client.generate("Say something").await.unwrap();

    assert_eq!(text, "Generated reply");
}

#[tokio::test]
async fn test_generate_sends_single_part_contents_body() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "contents": [{"parts": [{"text": "Is the sky green?"}]}]
    });

    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response("No.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.generate("Is the sky green?").await.unwrap();
}

#[tokio::test]
async fn test_generate_uses_query_key_not_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response("ok")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.generate("auth check").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].headers.get("authorization").is_none(),
        "generative requests must not carry a bearer token"
    );
    assert!(requests[0].url.query().unwrap().contains("key=test-key"));
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.generate("quota?").await.unwrap_err();

    match err {
        GenerationError::Http { status } => assert_eq!(status, 429),
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_candidates_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.generate("blocked").await.unwrap_err();

    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_empty_generated_text_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response("")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.generate("empty").await.unwrap_err();

    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.generate("html?").await.unwrap_err();

    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on this port
    let mut config = GeminiConfig::new("test-key");
    config.api_base_url = "http://127.0.0.1:9".to_string();
    config.timeout_secs = 2;
    let client = GeminiClient::new(config);

    let err = client.generate("anyone there?").await.unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)));
}

#[tokio::test]
async fn test_model_name_is_part_of_the_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response("hi")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = GeminiConfig::new("test-key");
    config.api_base_url = mock_server.uri();
    config.model = "gemini-1.5-flash".to_string();
    let client = GeminiClient::new(config);

    client.generate("model routing").await.unwrap();
}
