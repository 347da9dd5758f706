use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// API metadata served at the root path
pub(crate) async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Contact Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "contacts": "/api/contacts",
            "users": "/api/users",
        },
    }))
}
