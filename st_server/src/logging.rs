//! Structured logging configuration.
//!
//! The tracing subscriber also receives the `log` records emitted by the
//! tournament library, so pairing and lifecycle events share one output.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var and default to
/// `info` with noisy HTTP internals held at `warn`.
///
/// # Example
///
/// ```no_run
/// use st_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower_http=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log API request/response
///
/// # Arguments
///
/// * `request_id` - Correlation ID of the request
/// * `method` - HTTP method
/// * `path` - Request path
/// * `status_code` - Response status code
/// * `duration_ms` - Request duration in milliseconds
pub fn log_api_request(
    request_id: &str,
    method: &str,
    path: &str,
    status_code: u16,
    duration_ms: u64,
) {
    if status_code >= 500 {
        tracing::error!(
            request_id = request_id,
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request failed"
        );
    } else {
        tracing::info!(
            request_id = request_id,
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request completed"
        );
    }
}

/// Log a tournament operation rejected by the engine
///
/// Client errors are expected traffic and stay at `debug`; storage failures
/// are logged at `error` with the unsanitized message.
pub fn log_operation_error(operation: &str, status_code: u16, message: &str) {
    if status_code >= 500 {
        tracing::error!(operation = operation, "Tournament operation failed: {}", message);
    } else {
        tracing::debug!(
            operation = operation,
            http_status = status_code,
            "Tournament operation rejected: {}",
            message
        );
    }
}
