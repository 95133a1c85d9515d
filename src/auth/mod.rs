//!
//! Caller identity forwarded by the API gateway
//!

mod error;
mod gateway_identity_validator;
mod require_all_roles;
mod role;
mod user;

pub use error::*;
pub use gateway_identity_validator::*;
pub use require_all_roles::*;
pub use role::*;
pub use user::*;
