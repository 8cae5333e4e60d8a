//! JOSE interoperability tests
//!
//! A relying party fetches the served JWKS, selects the key by `kid` and
//! verifies a JWT signed with the matching private key. This exercises the
//! JWK field encoding through an independent implementation (`jsonwebtoken`).
//!
//! `jsonwebtoken` cannot sign ES512, so P-521 keys are covered only by the
//! coordinate assertions in `jwks_endpoint_tests`.

use jsonwebtoken::Algorithm;
use jwks_test_utils::{fixtures, sign_test_token, verify_with_jwks, TestClaims, TestJwksServer};

async fn fetch_jwks(server: &TestJwksServer) -> Result<Vec<u8>, anyhow::Error> {
    Ok(reqwest::get(server.jwks_url()).await?.bytes().await?.to_vec())
}

#[tokio::test]
async fn test_es256_token_verifies_against_served_jwk() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;
    let claims = TestClaims::for_subject("alice");
    let token = sign_test_token(
        Algorithm::ES256,
        fixtures::EC_P256_PRIVATE_PEM,
        "test-key",
        &claims,
    )?;

    // Act
    let jwks = fetch_jwks(&server).await?;
    let verified = verify_with_jwks(&token, &jwks, Algorithm::ES256)?;

    // Assert
    assert_eq!(verified, claims);
    Ok(())
}

#[tokio::test]
async fn test_es384_token_verifies_against_served_jwk() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::EC_P384_PUBLIC_PEM).await?;
    let claims = TestClaims::for_subject("bob");
    let token = sign_test_token(
        Algorithm::ES384,
        fixtures::EC_P384_PRIVATE_PEM,
        "test-key",
        &claims,
    )?;

    let jwks = fetch_jwks(&server).await?;
    let verified = verify_with_jwks(&token, &jwks, Algorithm::ES384)?;

    assert_eq!(verified, claims);
    Ok(())
}

#[tokio::test]
async fn test_rs256_token_verifies_against_served_jwk() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::RSA_2048_PUBLIC_PEM).await?;
    let claims = TestClaims::for_subject("service-a");
    let token = sign_test_token(
        Algorithm::RS256,
        fixtures::RSA_2048_PRIVATE_PEM,
        "test-key",
        &claims,
    )?;

    let jwks = fetch_jwks(&server).await?;
    let verified = verify_with_jwks(&token, &jwks, Algorithm::RS256)?;

    assert_eq!(verified, claims);
    Ok(())
}

/// A token signed by a different key must not verify against the served JWK.
#[tokio::test]
async fn test_token_from_other_key_is_rejected() -> Result<(), anyhow::Error> {
    let server = TestJwksServer::spawn(fixtures::p256_public_pem(3)?.as_str()).await?;
    let token = sign_test_token(
        Algorithm::ES256,
        fixtures::EC_P256_PRIVATE_PEM,
        "test-key",
        &TestClaims::for_subject("mallory"),
    )?;

    let jwks = fetch_jwks(&server).await?;

    assert!(verify_with_jwks(&token, &jwks, Algorithm::ES256).is_err());
    Ok(())
}
