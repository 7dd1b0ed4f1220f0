#![allow(dead_code)]

//! Test infrastructure for gs-server API tests

use gs_auth::{Claims, JwtValidator};
use gs_server::AppState;

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/gs-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
    }
}

/// Mint a valid HS256 token for the given uid
pub fn mint_token(uid: &str) -> String {
    let claims = Claims {
        sub: uid.to_string(),
        email: Some(format!("{}@test.local", uid)),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to mint test token")
}

/// Create a test user row
pub async fn seed_user(pool: &SqlitePool, uid: &str) {
    sqlx::query("INSERT INTO users (uid, email) VALUES (?, ?)")
        .bind(uid)
        .bind(format!("{}@test.local", uid))
        .execute(pool)
        .await
        .expect("Failed to seed user");
}

/// Put a uid in a group's member set directly
pub async fn seed_group_member(pool: &SqlitePool, group_id: &str, uid: &str) {
    sqlx::query("INSERT INTO group_members (group_id, uid) VALUES (?, ?)")
        .bind(group_id)
        .bind(uid)
        .execute(pool)
        .await
        .expect("Failed to seed group member");
}

/// Write an invite row directly
pub async fn seed_invite(pool: &SqlitePool, token: &str, group_id: &str, expiration: i64) {
    sqlx::query("INSERT INTO invites (token, group_id, expiration) VALUES (?, ?, ?)")
        .bind(token)
        .bind(group_id)
        .bind(expiration)
        .execute(pool)
        .await
        .expect("Failed to seed invite");
}

pub async fn invite_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM invites")
        .fetch_one(pool)
        .await
        .expect("Failed to count invites")
}

pub async fn is_group_member(pool: &SqlitePool, group_id: &str, uid: &str) -> bool {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM group_members WHERE group_id = ? AND uid = ?")
            .bind(group_id)
            .bind(uid)
            .fetch_one(pool)
            .await
            .expect("Failed to check group membership");
    count > 0
}

pub async fn user_has_group(pool: &SqlitePool, uid: &str, group_id: &str) -> bool {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_groups WHERE uid = ? AND group_id = ?")
            .bind(uid)
            .bind(group_id)
            .fetch_one(pool)
            .await
            .expect("Failed to check user groups");
    count > 0
}
