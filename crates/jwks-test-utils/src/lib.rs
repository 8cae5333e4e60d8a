//! # JWKS Test Utilities
//!
//! Shared test utilities for the JWKS publisher.
//!
//! This crate provides:
//! - Key fixtures (PEM files with known coordinates, deterministic generated keys)
//! - Server test harness (TestJwksServer for E2E tests)
//! - JWT signing helpers for JOSE interoperability checks
//! - Custom assertions (JwksAssertions trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jwks_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;
//!
//!     let body: serde_json::Value = reqwest::get(server.jwks_url()).await?.json().await?;
//!
//!     body.assert_single_key()
//!         .assert_ec_key("P-256", fixtures::EC_P256_X_HEX, fixtures::EC_P256_Y_HEX)
//!         .assert_metadata("test-key", "sig", "ES256");
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod server_harness;
pub mod tokens;

// Re-export commonly used items
pub use assertions::*;
pub use server_harness::*;
pub use tokens::*;
