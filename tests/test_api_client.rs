mod helpers;

use granolaview::domain::DomainError;
use granolaview::infrastructure::config::ApiConfig;
use granolaview::infrastructure::{ApiClient, CredentialStore};
use helpers::{credentials_json, TestServer, TEST_TOKEN};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_valid_credentials_when_posting_then_sends_bearer_and_client_headers() {
    // Arrange
    let fixture = TestServer::new().await.unwrap();
    Mock::given(method("POST"))
        .and(path("/v2/get-documents"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("User-Agent", "Granola/5.354.0"))
        .and(header("X-Client-Version", "5.354.0"))
        .and(body_json(json!({ "limit": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .expect(1)
        .mount(&fixture.server)
        .await;
    let client = fixture.client();

    // Act
    let response = client
        .post("/v2/get-documents", &json!({ "limit": 1 }))
        .await
        .unwrap();

    // Assert
    assert_eq!(response, json!({ "docs": [] }));
}

#[tokio::test]
async fn given_error_status_when_posting_then_returns_transport_error_with_body() {
    // Arrange
    let fixture = TestServer::new().await.unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&fixture.server)
        .await;

    // Act
    let result = fixture.client().post("/v2/get-documents", &json!({})).await;

    // Assert
    match result {
        Err(DomainError::TransportError { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "token expired");
        }
        other => panic!("Expected TransportError, got {:?}", other),
    }
}

#[tokio::test]
async fn given_malformed_body_when_posting_then_returns_parse_error() {
    let fixture = TestServer::new().await.unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&fixture.server)
        .await;

    let result = fixture.client().post("/v2/get-documents", &json!({})).await;

    assert!(matches!(result, Err(DomainError::ParseError(_))));
}

#[tokio::test]
async fn given_missing_credentials_file_when_posting_then_returns_config_error_without_request() {
    // Arrange
    let fixture = TestServer::new().await.unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&fixture.server)
        .await;
    let client = ApiClient::new(
        &fixture.config().api,
        CredentialStore::new(fixture.credentials_path.with_file_name("missing.json")),
    );

    // Act
    let result = client.post("/v2/get-documents", &json!({})).await;

    // Assert
    assert!(matches!(result, Err(DomainError::ConfigError(_))));
}

#[tokio::test]
async fn given_unreachable_server_when_posting_then_returns_network_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config, CredentialStore::with_token("t"));

    let result = client.post("/v2/get-documents", &json!({})).await;

    assert!(matches!(result, Err(DomainError::NetworkError(_))));
}

#[tokio::test]
async fn given_token_loaded_once_when_file_changes_then_cached_token_is_reused() {
    // Arrange
    let fixture = TestServer::new().await.unwrap();
    Mock::given(method("POST"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&fixture.server)
        .await;
    let client = fixture.client();

    // Act
    client.post("/v2/get-documents", &json!({})).await.unwrap();
    std::fs::write(&fixture.credentials_path, credentials_json("rotated-token")).unwrap();
    let second = client.post("/v2/get-documents", &json!({})).await;

    // Assert
    assert!(second.is_ok());
}

#[tokio::test]
async fn given_concurrent_first_access_when_loading_token_then_all_callers_agree() {
    let fixture = TestServer::new().await.unwrap();
    let store = CredentialStore::new(&fixture.credentials_path);

    let (a, b, c) = tokio::join!(store.token(), store.token(), store.token());

    assert_eq!(a.unwrap(), TEST_TOKEN);
    assert_eq!(b.unwrap(), TEST_TOKEN);
    assert_eq!(c.unwrap(), TEST_TOKEN);
}

#[tokio::test]
async fn given_tokens_without_access_token_when_loading_then_returns_auth_error() {
    let fixture = TestServer::new().await.unwrap();
    let inner = json!({ "refresh_token": "r" }).to_string();
    std::fs::write(
        &fixture.credentials_path,
        json!({ "workos_tokens": inner }).to_string(),
    )
    .unwrap();
    let store = CredentialStore::new(&fixture.credentials_path);

    assert!(matches!(store.token().await, Err(DomainError::AuthError(_))));
}
