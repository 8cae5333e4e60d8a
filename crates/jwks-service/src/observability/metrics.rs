//! Metrics definitions for the JWKS publisher
//!
//! All metrics follow Prometheus naming conventions:
//! - `jwks_` prefix
//! - `_total` suffix for counters
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `key_type`: 3 values (EC, RSA, unknown)
//! - `status`: success plus one value per `JwksError` category

use metrics::counter;

/// Record a request answered by the publication endpoint
///
/// Metric: `jwks_requests_total`
pub fn record_jwks_request() {
    counter!("jwks_requests_total").increment(1);
}

/// Record the outcome of loading the public key at startup
///
/// Metric: `jwks_key_load_total`
/// Labels: `key_type`, `status`
pub fn record_key_load(key_type: &str, status: &str) {
    counter!("jwks_key_load_total", "key_type" => key_type.to_string(), "status" => status.to_string())
        .increment(1);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    fn counter_value(recorder: &DebuggingRecorder, name: &str) -> Option<u64> {
        recorder
            .snapshotter()
            .snapshot()
            .into_vec()
            .into_iter()
            .find(|(key, _, _, _)| key.key().name() == name)
            .and_then(|(_, _, _, value)| match value {
                DebugValue::Counter(count) => Some(count),
                _ => None,
            })
    }

    #[test]
    fn test_record_jwks_request_counts_each_call() {
        let recorder = DebuggingRecorder::new();

        metrics::with_local_recorder(&recorder, || {
            record_jwks_request();
            record_jwks_request();
            record_jwks_request();
        });

        assert_eq!(counter_value(&recorder, "jwks_requests_total"), Some(3));
    }

    #[test]
    fn test_record_key_load_labels() {
        let recorder = DebuggingRecorder::new();

        metrics::with_local_recorder(&recorder, || {
            record_key_load("EC", "success");
        });

        let snapshot = recorder.snapshotter().snapshot().into_vec();
        let (key, _, _, value) = snapshot
            .into_iter()
            .find(|(key, _, _, _)| key.key().name() == "jwks_key_load_total")
            .unwrap();

        let labels: Vec<(String, String)> = key
            .key()
            .labels()
            .map(|l| (l.key().to_string(), l.value().to_string()))
            .collect();
        assert!(labels.contains(&("key_type".to_string(), "EC".to_string())));
        assert!(labels.contains(&("status".to_string(), "success".to_string())));
        assert_eq!(value, DebugValue::Counter(1));
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_jwks_request();
        record_key_load("unknown", "format");
    }
}
