use std::sync::Arc;

use axum::{Json, debug_handler, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, LenientJson, config::Config, db::Database};

pub const SESSION_TOKEN_STUB: &str = "playdate_jwt_token_stub";
pub const USER_ID_STUB: &str = "uuid-stub";

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub firebase_token: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub is_new_user: bool,
}

// TODO: verify the token against Firebase and look the user up in `_db`
// before minting a real session token.
#[debug_handler(state = AppState)]
pub async fn login(
    State(_db): State<Database>,
    State(config): State<Arc<Config>>,
    LenientJson(request): LenientJson<LoginRequest>,
) -> Json<LoginResponse> {
    let has_token = request.is_some_and(|request| !request.firebase_token.is_empty());
    info!(project = %config.firebase_project_id, has_token, "login");

    Json(LoginResponse {
        token: SESSION_TOKEN_STUB.to_owned(),
        user_id: USER_ID_STUB.to_owned(),
        is_new_user: false,
    })
}
