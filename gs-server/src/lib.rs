pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    identity,
    invites::{
        create_invite_query::CreateInviteQuery,
        invites::{create_invite, join_invite},
        join_invite_query::JoinInviteQuery,
    },
    users::{
        user_created_event::UserCreatedEvent,
        user_deleted_event::UserDeletedEvent,
        users::{user_created, user_deleted},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
