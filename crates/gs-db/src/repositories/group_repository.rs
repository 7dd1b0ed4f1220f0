use crate::Result as DbErrorResult;

use sqlx::SqlitePool;

/// Group-side membership access. Group creation itself happens elsewhere;
/// a group exists as soon as it has a member entry.
pub struct GroupRepository {
    pool: SqlitePool,
}

impl GroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn is_member(&self, group_id: &str, uid: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM group_members WHERE group_id = ? AND uid = ?",
        )
        .bind(group_id)
        .bind(uid)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Record a uid on the group's side of a membership. Idempotent.
    pub async fn add_member(&self, group_id: &str, uid: &str) -> DbErrorResult<()> {
        sqlx::query("INSERT OR IGNORE INTO group_members (group_id, uid) VALUES (?, ?)")
            .bind(group_id)
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn members(&self, group_id: &str) -> DbErrorResult<Vec<String>> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT uid FROM group_members WHERE group_id = ? ORDER BY uid",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(uid,)| uid).collect())
    }
}
