use gs_auth::JwtValidator;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Process-wide dependencies, built once in main and injected into every
/// handler through axum state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
}
