//! Tests for the client API surface that require no running server.

use netorca_client::{ChangeInstanceState, Client, ClientError};
use std::time::Duration;

#[test]
fn test_client_construction() {
    let client = Client::new("http://localhost:8080", "key", "v1", Duration::from_secs(5));
    assert!(client.is_ok());

    let client = Client::new("https://api.example.com", "key", "v1", Duration::from_secs(5));
    assert!(client.is_ok());
}

#[test]
fn test_base_url_normalization() {
    let client = Client::new("http://x", "key", "v1", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url(), "http://x/v1/");

    let client = Client::new("http://x/", "key", "v1", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url(), "http://x/v1/");
}

#[test]
fn test_client_rejects_bad_configuration() {
    for (base_url, api_key, api_version) in [
        ("", "key", "v1"),
        ("ftp://x", "key", "v1"),
        ("localhost:8080", "key", "v1"),
        ("http://x", "", "v1"),
        ("http://x", "key", ""),
    ] {
        let result = Client::new(base_url, api_key, api_version, Duration::from_secs(5));
        assert!(
            matches!(result, Err(ClientError::InvalidArgument(_))),
            "expected InvalidArgument for ({:?}, {:?}, {:?})",
            base_url,
            api_key,
            api_version
        );
    }
}

#[test]
fn test_zero_timeout_is_accepted() {
    // The contract requires timeout >= 0; zero is a valid (if useless) value.
    let client = Client::new("http://x", "key", "v1", Duration::from_secs(0));
    assert!(client.is_ok());
}

#[test]
fn test_client_is_cloneable() {
    let client = Client::new("http://x", "key", "v1", Duration::from_secs(5)).unwrap();
    let clone = client.clone();
    assert_eq!(clone.base_url(), client.base_url());
}

#[test]
fn test_invalid_argument_error_display() {
    let result = Client::new("invalid-url", "key", "v1", Duration::from_secs(5));
    match result {
        Err(ClientError::InvalidArgument(msg)) => {
            assert!(msg.contains("http://"));
        }
        _ => panic!("expected InvalidArgument error"),
    }
}

#[test]
fn test_state_display_matches_wire_literals() {
    assert_eq!(ChangeInstanceState::Pending.to_string(), "PENDING");
    assert_eq!(ChangeInstanceState::Error.to_string(), "ERROR");
}
