use serde::Deserialize;

/// Identity-provider account-created event payload.
#[derive(Debug, Deserialize)]
pub struct UserCreatedEvent {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}
