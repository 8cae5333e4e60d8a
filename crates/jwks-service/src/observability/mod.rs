//! Observability for the JWKS publisher
//!
//! Logging is `tracing` throughout; handlers use `#[instrument(skip_all)]`.
//! Key material is never logged, only its type and size.
//!
//! Metrics go through the `metrics` facade. An exporter is only installed
//! when an operator configures a dedicated metrics address, so the
//! publication listener keeps serving a single path.

pub mod metrics;

pub use metrics::{record_jwks_request, record_key_load};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

/// Install the global Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn install_prometheus_exporter(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()
}
