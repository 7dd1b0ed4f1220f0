pub mod invite;
pub mod user;
