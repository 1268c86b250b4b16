use crate::client::{LlmClient, truncate};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

#[tokio::test]
async fn test_complete_returns_first_choice() {
    let server = setup_mock_server().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": {
                    "content": "test response",
                    "role": "assistant"
                }
            }]
        })))
        .mount(&server)
        .await;

    let result = client.complete("hello").await.unwrap();
    assert_eq!(result, "test response");
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let server = setup_mock_server().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.complete("hello").await;
    assert!(result.is_err());
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("500"));
    assert!(err_msg.contains("Internal Server Error"));
}

#[tokio::test]
async fn test_no_retry_on_failure() {
    let server = setup_mock_server().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    // expect(1) fails the test if the client were to retry
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.complete("hello").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_empty_choices_is_error() {
    let server = setup_mock_server().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
        )
        .mount(&server)
        .await;

    let result = client.complete("hello").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("no choices"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = setup_mock_server().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.complete("hello").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("JSON parse error"));
}

#[test]
fn test_truncate_within_limit() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exceeds_limit() {
    assert_eq!(truncate("hello world", 5), "hello");
}

#[test]
fn test_truncate_unicode_boundary() {
    let s = "привет";
    let result = truncate(s, 4);
    assert!(result.len() <= 4);
}
