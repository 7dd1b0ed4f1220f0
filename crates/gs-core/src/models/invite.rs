use crate::token;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// How long a freshly minted invite is valid for, in milliseconds (24 hours).
///
/// Recorded on the invite record. Redemption does not compare it against the
/// clock; see `join_invite`.
pub const INVITE_TTL_MS: i64 = 86_400_000;

/// A single-group invite. Whoever holds the token may join the group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invite {
    pub token: String,
    pub group_id: String,
    /// Expiration as epoch milliseconds.
    pub expiration: i64,
}

impl Invite {
    /// Mint a new invite for `group_id` with a random token and an
    /// expiration of now + 24 hours. Token uniqueness is not checked.
    pub fn new(group_id: &str) -> Self {
        Self {
            token: token::generate(),
            group_id: group_id.to_string(),
            expiration: Utc::now().timestamp_millis() + INVITE_TTL_MS,
        }
    }
}
