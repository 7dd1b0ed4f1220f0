pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::group_repository::GroupRepository;
pub use repositories::invite_repository::InviteRepository;
pub use repositories::user_repository::UserRepository;
