pub mod error;
pub mod identity;
pub mod invites;
pub mod users;
