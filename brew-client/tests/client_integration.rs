// brew-client/tests/client_integration.rs

use brew_client::{CafeClient, ClientConfig, Session, SessionStore};
use shared::models::Role;
use tempfile::TempDir;

#[tokio::test]
async fn test_session_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());

    // Nothing persisted yet
    assert!(store.load().unwrap().is_none());

    let session = Session {
        token: "test-token".to_string(),
        user_id: 42,
        username: "barista".to_string(),
        role: Role::Staff,
    };
    store.save(&session).unwrap();

    let loaded = store.load().unwrap().expect("session should persist");
    assert_eq!(loaded.token, "test-token");
    assert_eq!(loaded.user_id, 42);
    assert_eq!(loaded.username, "barista");
    assert_eq!(loaded.role, Role::Staff);

    // Logout clears the file
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    assert!(!store.file_path().exists());
}

#[tokio::test]
async fn test_session_store_clear_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());
    store.clear().unwrap();
    store.clear().unwrap();
}

#[tokio::test]
async fn test_client_creation() {
    let client = CafeClient::new(&ClientConfig::new("http://localhost:8080")).unwrap();
    assert!(!client.is_logged_in());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_client_token_lifecycle() {
    let mut client = CafeClient::new(&ClientConfig::default()).unwrap();
    client.set_token("jwt");
    assert!(client.is_logged_in());
    assert_eq!(client.token(), Some("jwt"));
    client.clear_token();
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_config_token_carries_into_client() {
    let config = ClientConfig::new("http://localhost:8080").with_token("persisted");
    let client = config.build().unwrap();
    assert!(client.is_logged_in());
    assert_eq!(client.token(), Some("persisted"));
}
