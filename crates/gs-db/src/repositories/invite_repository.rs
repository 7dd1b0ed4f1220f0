use crate::Result as DbErrorResult;

use gs_core::Invite;

use sqlx::SqlitePool;

pub struct InviteRepository {
    pool: SqlitePool,
}

impl InviteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Write an invite record. Token uniqueness is not checked; a duplicate
    /// token overwrites the earlier record, matching set semantics.
    pub async fn create(&self, invite: &Invite) -> DbErrorResult<()> {
        sqlx::query("INSERT OR REPLACE INTO invites (token, group_id, expiration) VALUES (?, ?, ?)")
            .bind(&invite.token)
            .bind(&invite.group_id)
            .bind(invite.expiration)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Look up an invite. Redemption never deletes the record, so a token
    /// stays resolvable indefinitely.
    pub async fn find_by_token(&self, token: &str) -> DbErrorResult<Option<Invite>> {
        let row = sqlx::query_as::<_, (String, i64)>(
            "SELECT group_id, expiration FROM invites WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(group_id, expiration)| Invite {
            token: token.to_string(),
            group_id,
            expiration,
        }))
    }
}
