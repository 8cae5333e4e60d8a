use jwks_service::config::Config;
use jwks_service::handlers::jwks_handler::AppState;
use jwks_service::observability;
use jwks_service::routes;
use jwks_service::services::key_management_service;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwks_service=info,jwks_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse arguments before touching the filesystem or the network
    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;

    if let Some(metrics_addr) = config.metrics_bind_address {
        observability::install_prometheus_exporter(metrics_addr).map_err(|e| {
            error!("Failed to install metrics exporter: {}", e);
            e
        })?;
        info!("Metrics exporter listening on {}", metrics_addr);
    }

    // Load the key and compute the response body once
    let public_key = key_management_service::load_public_key(&config.key_path).map_err(|e| {
        error!(
            path = %config.key_path.display(),
            error_category = e.category(),
            "Could not load public key: {}",
            e
        );
        e
    })?;

    info!(
        key = %public_key,
        kid = %config.metadata.kid,
        "Public key loaded"
    );

    let jwks_body = key_management_service::encode_jwks_body(&public_key, &config.metadata)
        .map_err(|e| {
            error!("Could not marshal key set: {}", e);
            e
        })?;

    let state = Arc::new(AppState { jwks_body });
    let app = routes::build_routes(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| {
            error!("Failed to bind {}: {}", config.bind_address, e);
            e
        })?;

    info!("JWKS publisher listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
