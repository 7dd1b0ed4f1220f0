use serde::{Deserialize, Serialize};

/// A user account mirrored from the identity provider.
///
/// Rows are created and deleted by provider lifecycle events, never by the
/// invite endpoints themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
}
