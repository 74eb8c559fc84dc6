//! Liveness checks: the user records a short video performing a gesture.

use axum::{Json, debug_handler};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::LenientJson;

pub const PENDING_STATUS: &str = "Verification Pending";
pub const PENDING_ETA: &str = "30s";

#[derive(Debug, Default, Deserialize)]
pub struct VerificationRequest {
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub gesture_code: String,
}

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub status: &'static str,
    pub eta: &'static str,
}

#[debug_handler]
pub async fn verify(LenientJson(request): LenientJson<VerificationRequest>) -> Json<VerificationResponse> {
    if let Some(request) = request {
        info!(gesture = %request.gesture_code, has_video = !request.video_url.is_empty(), "liveness check queued");
    }

    Json(VerificationResponse {
        status: PENDING_STATUS,
        eta: PENDING_ETA,
    })
}
