use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JoinInviteQuery {
    /// Invite token. An absent token resolves the same as an unknown one.
    #[serde(rename = "inviteId")]
    pub invite_id: Option<String>,
}
