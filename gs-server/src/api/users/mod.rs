pub mod user_created_event;
pub mod user_deleted_event;
pub mod users;
