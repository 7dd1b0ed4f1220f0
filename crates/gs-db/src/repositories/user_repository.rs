use crate::Result as DbErrorResult;

use gs_core::User;

use sqlx::SqlitePool;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a user from a provider signup event. Replaces the email if the
    /// row already exists.
    pub async fn upsert(&self, uid: &str, email: Option<&str>) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (uid, email)
                VALUES (?, ?)
                ON CONFLICT (uid) DO UPDATE SET email = excluded.email
                "#,
        )
        .bind(uid)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the user subtree: the account row and the user's side of every
    /// membership. The group-side member entries are left alone.
    pub async fn delete(&self, uid: &str) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM users WHERE uid = ?")
            .bind(uid)
            .execute(&self.pool)
            .await?;

        sqlx::query("DELETE FROM user_groups WHERE uid = ?")
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Record a group on the user's side of a membership. Idempotent.
    pub async fn add_group(&self, uid: &str, group_id: &str) -> DbErrorResult<()> {
        sqlx::query("INSERT OR IGNORE INTO user_groups (uid, group_id) VALUES (?, ?)")
            .bind(uid)
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<User>> {
        let row =
            sqlx::query_as::<_, (String, Option<String>)>("SELECT uid, email FROM users WHERE uid = ?")
                .bind(uid)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(uid, email)| User { uid, email }))
    }

    pub async fn group_ids(&self, uid: &str) -> DbErrorResult<Vec<String>> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT group_id FROM user_groups WHERE uid = ? ORDER BY group_id",
        )
        .bind(uid)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(group_id,)| group_id).collect())
    }
}
