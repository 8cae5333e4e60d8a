//! Test server harness for E2E testing
//!
//! Provides TestJwksServer for spawning real publisher instances in tests.

use axum::body::Bytes;
use jwks_service::crypto;
use jwks_service::handlers::jwks_handler::AppState;
use jwks_service::models::JwkMetadata;
use jwks_service::routes::{self, JWKS_PATH};
use jwks_service::services::key_management_service;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the JWKS publisher in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_jwks_e2e() -> Result<(), anyhow::Error> {
///     let server = TestJwksServer::spawn(fixtures::EC_P256_PUBLIC_PEM).await?;
///
///     let response = reqwest::get(server.jwks_url()).await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestJwksServer {
    addr: SocketAddr,
    jwks_body: Bytes,
    handle: JoinHandle<()>,
}

impl TestJwksServer {
    /// Spawn a server publishing `pem` with default metadata
    pub async fn spawn(pem: &str) -> Result<Self, anyhow::Error> {
        Self::spawn_with_metadata(pem, JwkMetadata::default()).await
    }

    /// Spawn a server publishing `pem` with custom `kid` / `use` / `alg`
    ///
    /// The server will:
    /// - Parse the PEM and encode the JWKS body exactly like the binary does
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    pub async fn spawn_with_metadata(
        pem: &str,
        metadata: JwkMetadata,
    ) -> Result<Self, anyhow::Error> {
        let key = crypto::parse_public_key_pem(pem.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to parse test key: {}", e))?;

        let jwks_body = key_management_service::encode_jwks_body(&key, &metadata)
            .map_err(|e| anyhow::anyhow!("Failed to encode JWKS: {}", e))?;

        let state = Arc::new(AppState {
            jwks_body: jwks_body.clone(),
        });

        // Build routes using the service's real route builder
        let app = routes::build_routes(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            jwks_body,
            handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the full URL of the JWKS endpoint
    pub fn jwks_url(&self) -> String {
        format!("{}{}", self.url(), JWKS_PATH)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Body the server was started with
    pub fn jwks_body(&self) -> &Bytes {
        &self.jwks_body
    }
}

impl Drop for TestJwksServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
