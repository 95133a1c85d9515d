mod broadcast_service;
mod notifications_service;
mod preferences_service;
mod stats_service;

pub use broadcast_service::*;
pub use notifications_service::*;
pub use preferences_service::*;
pub use stats_service::*;

use crate::{dto::input, error::Error};

///
/// ### Errors
/// - [Error::Validation] when page is 0 or limit is outside of 1..=100
///
fn validate_pagination(pagination: &input::Pagination) -> Result<(), Error> {
    if pagination.page < 1 {
        return Err(Error::Validation("page must be at least 1"));
    }
    if pagination.limit < 1 || pagination.limit > input::MAX_PAGE_LIMIT {
        return Err(Error::Validation("limit must be between 1 and 100"));
    }

    Ok(())
}
