use serde::Deserialize;

/// Identity-provider account-deleted event payload.
#[derive(Debug, Deserialize)]
pub struct UserDeletedEvent {
    pub uid: String,
}
