//! Static responses of the standalone health-check service.

use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "running",
        "service": "bd-updates-health",
        "message": "Health check service is up",
    }))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "health": "ok" }))
}
