//! HTTP metrics middleware.
//!
//! Apply with `route_layer` so that the matched route template (for example
//! `/api/tournaments/{id}`) is available and used as the `path` label,
//! keeping label cardinality independent of tournament and player IDs.
//!
//! ```rust,no_run
//! use axum::{Router, routing::get, middleware};
//! use st_server::api::middleware::track_metrics;
//! # async fn handler() {}
//!
//! let app: Router = Router::new()
//!     .route("/api/tournaments", get(handler))
//!     .route_layer(middleware::from_fn(track_metrics));
//! # let _ = app;
//! ```

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics;

/// Record request count and latency for every routed request
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let path = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => request.uri().path().to_string(),
    };
    let method = request.method().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    metrics::http_requests_total(&method, &path, response.status().as_u16());
    metrics::http_request_duration_ms(&method, &path, elapsed_ms);

    response
}
