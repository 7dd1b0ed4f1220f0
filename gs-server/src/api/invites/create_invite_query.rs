use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateInviteQuery {
    /// Target group id. Required; its absence is a 400, checked before
    /// anything else.
    #[serde(rename = "listID")]
    pub list_id: Option<String>,
}
