//! Invite creation and redemption handlers.

use crate::api::identity;
use crate::{ApiError, ApiResult, AppState, CreateInviteQuery, JoinInviteQuery};

use gs_core::Invite;
use gs_db::{GroupRepository, InviteRepository, UserRepository};

use std::panic::Location;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use error_location::ErrorLocation;

/// GET /createInvite?listID=<groupId>
///
/// A caller who is already a member of the group mints an invite token.
/// Responds 200 with the bare token as plain text.
pub async fn create_invite(
    State(state): State<AppState>,
    Query(query): Query<CreateInviteQuery>,
    headers: HeaderMap,
) -> ApiResult<String> {
    // Parameter check comes before identity verification; an empty value
    // counts as missing
    let Some(list_id) = query.list_id.filter(|id| !id.is_empty()) else {
        return Err(ApiError::BadRequest {
            message: "No listID query provided.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let caller = identity::verify(&state, &headers)?;

    let groups = GroupRepository::new(state.pool.clone());
    if !groups.is_member(&list_id, &caller.uid).await? {
        return Err(ApiError::Unauthorized {
            message: format!("{} is not a member of group {}", caller.uid, list_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let invite = Invite::new(&list_id);
    InviteRepository::new(state.pool.clone())
        .create(&invite)
        .await?;

    log::info!("Invite created for group {} by {}", list_id, caller.uid);

    Ok(invite.token)
}

/// GET /joinInvite?inviteId=<token>
///
/// Redeems an invite: links the caller into the group on both sides.
/// Expiration is recorded on the invite but deliberately not compared
/// here, and the invite is not consumed; both are preserved observed
/// behavior, not oversights to fix.
pub async fn join_invite(
    State(state): State<AppState>,
    Query(query): Query<JoinInviteQuery>,
    headers: HeaderMap,
) -> ApiResult<String> {
    let caller = identity::verify(&state, &headers)?;

    let invite = match query.invite_id {
        Some(ref token) => {
            InviteRepository::new(state.pool.clone())
                .find_by_token(token)
                .await?
        }
        None => None,
    };
    let Some(invite) = invite else {
        return Err(ApiError::NotFound {
            message: "Invite does not exist.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if invite.group_id.is_empty() {
        return Err(ApiError::InconsistentState {
            message: "Invite does not have group.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Two independent idempotent writes; no transaction spans them
    GroupRepository::new(state.pool.clone())
        .add_member(&invite.group_id, &caller.uid)
        .await?;
    UserRepository::new(state.pool.clone())
        .add_group(&caller.uid, &invite.group_id)
        .await?;

    log::info!("{} joined group {}", caller.uid, invite.group_id);

    Ok("Successfully added to group.".to_string())
}
