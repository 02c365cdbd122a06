use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

pub const SUCCEED: &str = "Succeed";
pub const FAILED: &str = "Failed";

/// Body returned by endpoints that answer with an outcome instead of a page.
#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub message: &'static str,
}

pub fn outcome(succeeded: bool) -> impl IntoResponse {
    let body = OutcomeResponse {
        message: if succeeded { SUCCEED } else { FAILED },
    };
    (StatusCode::OK, Json(body))
}

#[derive(Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub service: &'static str,
}

pub fn health(service: &'static str) -> impl IntoResponse {
    Json(HealthPayload {
        status: "ok",
        service,
    })
}
