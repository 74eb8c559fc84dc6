mod nudge;
mod send;

pub use nudge::{NUDGE_REASONING, NudgeResponse, STUB_HISTORY, wingman_nudge};
pub use send::{ChatMessage, SENT_STATUS, send_message};
