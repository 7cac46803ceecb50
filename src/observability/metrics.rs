//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sum_requests_total` (counter): requests by route, status
//! - `sum_request_duration_seconds` (histogram): handler latency by route
//!
//! Without an installed recorder the macros are no-ops.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    ::metrics::counter!(
        "sum_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("sum_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
