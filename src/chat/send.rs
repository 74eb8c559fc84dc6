use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use tracing::debug;

use crate::{AppState, LenientJson, StatusResponse, db::Database};

pub const SENT_STATUS: &str = "Sent";

#[derive(Debug, Default, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub text: String,
}

#[debug_handler(state = AppState)]
pub async fn send_message(
    State(_db): State<Database>,
    LenientJson(message): LenientJson<ChatMessage>,
) -> Json<StatusResponse> {
    if let Some(message) = message {
        debug!(sender = %message.sender, len = message.text.len(), "chat message");
    }

    Json(StatusResponse { status: SENT_STATUS })
}
