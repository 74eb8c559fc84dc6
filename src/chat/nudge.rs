use axum::{Json, debug_handler, extract::State};
use serde::{Deserialize, Serialize};

use crate::{AppState, db::Database, wingman};

/// Stands in for the conversation until messages are stored.
pub const STUB_HISTORY: [&str; 3] = ["Hey", "Wassup", "Not much"];
pub const NUDGE_REASONING: &str = "User B mentioned craft beer recently.";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NudgeResponse {
    pub nudge: String,
    pub reasoning: String,
}

#[debug_handler(state = AppState)]
pub async fn wingman_nudge(State(_db): State<Database>) -> Json<NudgeResponse> {
    let nudge = wingman::chat_nudge(&STUB_HISTORY);

    Json(NudgeResponse {
        nudge: nudge.to_owned(),
        reasoning: NUDGE_REASONING.to_owned(),
    })
}
