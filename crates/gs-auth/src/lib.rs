pub mod claims;
pub mod error;
pub mod identity;
pub mod jwt_validator;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity::Identity;
pub use jwt_validator::JwtValidator;

/// Cookie carrying the identity-provider credential for browser callers.
pub const SESSION_COOKIE: &str = "__session";
