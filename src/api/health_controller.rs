use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::config::db::Pool;

// GET api/health
pub async fn health(pool: web::Data<Pool>) -> HttpResponse {
    match pool.get() {
        Ok(_) => HttpResponse::Ok().json(json!({ "status": "up", "database": "up" })),
        Err(err) => {
            log::warn!("Health check failed to reach database: {}", err);
            HttpResponse::ServiceUnavailable()
                .json(json!({ "status": "degraded", "database": "down" }))
        }
    }
}
