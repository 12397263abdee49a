use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_MESSAGE_KEY: &str = "imx:message";

/// One-shot notice shown on the next page the visitor opens.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionMessage(pub String);

impl SessionMessage {
    pub async fn insert(session: &Session, message: impl Into<String>) -> Result<(), Error> {
        session
            .insert(SESSION_MESSAGE_KEY, SessionMessage(message.into()))
            .await?;

        Ok(())
    }

    /// Remove and return the pending message
    pub async fn take(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionMessage>(SESSION_MESSAGE_KEY)
            .await?
            .map(|SessionMessage(message)| message))
    }
}
