use crate::api::invites::invites::{create_invite, join_invite};
use crate::api::users::users::{user_created, user_deleted};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Invite endpoints
        .route("/createInvite", get(create_invite))
        .route("/joinInvite", get(join_invite))
        // Identity-provider lifecycle webhooks
        .route("/events/user-created", post(user_created))
        .route("/events/user-deleted", post(user_deleted))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
