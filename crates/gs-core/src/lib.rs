pub mod models;
pub mod token;

pub use models::invite::{INVITE_TTL_MS, Invite};
pub use models::user::User;
