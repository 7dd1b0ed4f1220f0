pub mod create_invite_query;
pub mod invites;
pub mod join_invite_query;
