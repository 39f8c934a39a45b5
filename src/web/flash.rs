//! One-shot advisory messages carried in the session.
//!
//! Used for the out-of-order navigation notice: the rejecting handler sets
//! the message, and the next question render takes (and thereby clears) it.

use tower_sessions::Session;

const FLASH_KEY: &str = "flash";

pub async fn set(session: &Session, message: String) -> Result<(), tower_sessions::session::Error> {
    session.insert(FLASH_KEY, message).await
}

/// Read and remove the pending message, if any.
pub async fn take(session: &Session) -> Result<Option<String>, tower_sessions::session::Error> {
    session.remove::<String>(FLASH_KEY).await
}
