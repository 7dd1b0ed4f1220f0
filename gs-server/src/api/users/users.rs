//! Identity-provider lifecycle webhooks.
//!
//! The provider delivers account events as POSTs and discards the response
//! body; the only observable effect is the store mutation.

use crate::{ApiResult, AppState, UserCreatedEvent, UserDeletedEvent};

use gs_db::UserRepository;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

/// POST /events/user-created
pub async fn user_created(
    State(state): State<AppState>,
    Json(event): Json<UserCreatedEvent>,
) -> ApiResult<StatusCode> {
    UserRepository::new(state.pool.clone())
        .upsert(&event.uid, event.email.as_deref())
        .await?;

    log::info!("User {} recorded", event.uid);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /events/user-deleted
///
/// Removes the user subtree. Group-side member entries are left behind,
/// matching the provider-era behavior.
pub async fn user_deleted(
    State(state): State<AppState>,
    Json(event): Json<UserDeletedEvent>,
) -> ApiResult<StatusCode> {
    UserRepository::new(state.pool.clone())
        .delete(&event.uid)
        .await?;

    log::info!("User {} removed", event.uid);

    Ok(StatusCode::NO_CONTENT)
}
