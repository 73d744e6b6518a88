use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::registry::ServiceRegistry;

/// `GET /health` (인증 불필요)
pub async fn health_check(registry: web::Data<ServiceRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "opencdx_records",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": registry.storage,
    }))
}
