//! Prometheus metrics for monitoring the tournament server.
//!
//! Metrics are recorded through the `metrics` facade. They are exported in
//! Prometheus text format only when an exporter has been installed with
//! [`init_metrics`]; otherwise recording is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use st_server::metrics;
//! use std::net::SocketAddr;
//!
//! // Initialize metrics exporter
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! // Record HTTP request
//! metrics::http_requests_total("POST", "/api/tournaments", 200);
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Sets up a Prometheus scrape endpoint on the specified address.
/// Metrics will be available at `http://<addr>/metrics`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
///
/// Increments the total HTTP request counter with method, path, and status labels.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Tournament Metrics
// ============================================================================

/// Record a tournament operation and whether it succeeded.
///
/// `outcome` is `ok` on success, otherwise a short error class such as
/// `not_found`, `invalid` or `error`.
pub fn tournament_operations_total(operation: &'static str, outcome: &'static str) {
    metrics::counter!("tournament_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}
