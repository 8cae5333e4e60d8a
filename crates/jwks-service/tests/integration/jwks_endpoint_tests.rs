//! Integration tests for the publication endpoint
//!
//! Each test spawns a real server on a random port and talks to it over HTTP.

use jwks_service::models::JwkMetadata;
use jwks_test_utils::{fixtures, JwksAssertions, TestJwksServer};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

// ============================================================================
// EC keys
// ============================================================================

/// A known P-256 key is published with its exact coordinates and metadata.
#[tokio::test]
async fn test_p256_key_is_published() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;

    // Act
    let response = reqwest::get(server.jwks_url()).await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(&b"application/json"[..])
    );

    let body: serde_json::Value = response.json().await?;
    body.assert_single_key()
        .assert_ec_key("P-256", fixtures::EC_P256_X_HEX, fixtures::EC_P256_Y_HEX)
        .assert_metadata("test-key", "sig", "ES256");

    Ok(())
}

#[tokio::test]
async fn test_p384_key_is_published() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::EC_P384_PUBLIC_PEM).await?;

    let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;

    body.assert_single_key()
        .assert_ec_key("P-384", fixtures::EC_P384_X_HEX, fixtures::EC_P384_Y_HEX)
        .assert_metadata("test-key", "sig", "ES384");

    Ok(())
}

/// P-521 coordinates with a leading zero byte must stay 66 bytes wide.
#[tokio::test]
async fn test_p521_key_is_published_full_width() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::EC_P521_PUBLIC_PEM).await?;

    let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;

    body.assert_single_key()
        .assert_ec_key("P-521", fixtures::EC_P521_X_HEX, fixtures::EC_P521_Y_HEX)
        .assert_metadata("test-key", "sig", "ES512");

    Ok(())
}

// ============================================================================
// RSA keys
// ============================================================================

#[tokio::test]
async fn test_rsa_key_is_published() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::RSA_2048_PUBLIC_PEM).await?;

    let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;

    body.assert_single_key()
        .assert_rsa_key(fixtures::RSA_2048_MODULUS_HEX, "010001")
        .assert_metadata("test-key", "sig", "RS256");

    Ok(())
}

/// Moduli above 4096 bits are published unchanged.
#[tokio::test]
async fn test_rsa_8192_key_is_published() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::RSA_8192_PUBLIC_PEM).await?;

    let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;

    body.assert_single_key()
        .assert_rsa_key(fixtures::RSA_8192_MODULUS_HEX, "010001")
        .assert_metadata("test-key", "sig", "RS256");

    Ok(())
}

#[tokio::test]
async fn test_rsa_large_exponent_is_published() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::RSA_2048_LARGE_EXPONENT_PUBLIC_PEM).await?;

    let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;

    body.assert_single_key().assert_rsa_key(
        fixtures::RSA_2048_LARGE_EXPONENT_MODULUS_HEX,
        fixtures::RSA_LARGE_EXPONENT_HEX,
    );

    Ok(())
}

// ============================================================================
// Metadata
// ============================================================================

#[tokio::test]
async fn test_configured_metadata_is_published() -> Result<(), anyhow::Error> {
    let metadata = JwkMetadata {
        kid: "prod-2026-10".to_string(),
        use_: "sig".to_string(),
        alg: Some("ES256K".to_string()),
    };
    let server = TestJwksServer::spawn_with_metadata(fixtures::EC_P256_PUBLIC_PEM, metadata).await?;

    let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;

    body.assert_metadata("prod-2026-10", "sig", "ES256K");

    Ok(())
}

// ============================================================================
// Response stability
// ============================================================================

/// Every request, including concurrent ones, gets the startup body verbatim.
#[tokio::test]
async fn test_body_is_identical_across_requests() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = server.jwks_url();
        async move { client.get(url).send().await?.bytes().await }
    });

    let bodies = futures::future::join_all(requests).await;
    for body in bodies {
        assert_eq!(&body?, server.jwks_body());
    }

    Ok(())
}

#[tokio::test]
async fn test_method_is_not_checked() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;
    let client = reqwest::Client::new();

    let response = client.post(server.jwks_url()).send().await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&response.bytes().await?, server.jwks_body());

    Ok(())
}

#[tokio::test]
async fn test_other_paths_are_not_found() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;

    for path in ["/", "/.well-known/jwks.json", "/api/jwks.json"] {
        let response = reqwest::get(format!("{}{}", server.url(), path)).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} should 404", path);
    }

    Ok(())
}
