//! Liveness endpoints.

use actix_web::HttpResponse;
use blog_shared::MessageResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("message"))
}

/// GET /contacts
pub async fn contacts() -> HttpResponse {
    HttpResponse::Ok().json(256)
}

/// Health check endpoint - returns server status.
///
/// GET /health
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
