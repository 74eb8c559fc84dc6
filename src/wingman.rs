//! The "clued-in bestie" assistant.
//!
//! Both suggestions are canned for now. `generate_bio` is where a model call
//! would go once one is wired up to `OPENAI_API_KEY`.

use thiserror::Error;

pub const CHAT_NUDGE: &str = "They mentioned 'Toit'. Ask them if they prefer Stout or Lager! 🍺";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WingmanError {
    #[error("no tags supplied")]
    NoTags,
}

/// Drafts a bio from photo tags. Only the first tag is used.
pub fn generate_bio<S: AsRef<str>>(tags: &[S]) -> Result<String, WingmanError> {
    let first = tags.first().ok_or(WingmanError::NoTags)?;

    Ok(format!(
        "Based on your {} photos, I'd say: 'Adventure seeker looking for a coffee partner!'",
        first.as_ref()
    ))
}

/// Suggests the next line in a conversation. The history is not read yet.
pub fn chat_nudge<S: AsRef<str>>(_history: &[S]) -> &'static str {
    CHAT_NUDGE
}
