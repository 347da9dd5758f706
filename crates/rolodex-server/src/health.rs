use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

/// Liveness report for deployment monitoring
#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    /// Current wall-clock time, RFC 3339
    timestamp: jiff::Timestamp,
    /// Seconds since the server was built
    uptime: f64,
}

/// Health check handler
pub(crate) async fn health_handler(State(started): State<Instant>) -> impl IntoResponse {
    Json(HealthBody {
        status: "OK",
        timestamp: jiff::Timestamp::now(),
        uptime: started.elapsed().as_secs_f64(),
    })
}
