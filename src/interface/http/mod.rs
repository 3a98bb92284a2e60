pub mod agents_handler;
pub mod families_handler;
pub mod notes_handler;
pub mod problem;
pub mod properties_handler;
pub mod reminders_handler;
pub mod tenants_handler;

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
