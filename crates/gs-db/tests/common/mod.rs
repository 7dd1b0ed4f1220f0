#![allow(dead_code)]

//! Test infrastructure for gs-db repository tests

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Seed a group-side membership entry directly
pub async fn seed_member(pool: &SqlitePool, group_id: &str, uid: &str) {
    sqlx::query("INSERT INTO group_members (group_id, uid) VALUES (?, ?)")
        .bind(group_id)
        .bind(uid)
        .execute(pool)
        .await
        .expect("Failed to seed group member");
}
