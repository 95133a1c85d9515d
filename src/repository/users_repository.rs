use super::error::Error;
use axum::async_trait;
use uuid::Uuid;

///
/// Read-only access to the users directory owned by the account service
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds ids of active users.
    /// When `role` is `None` users of every role are returned.
    ///
    async fn find_active_ids(&self, role: Option<&'static str>) -> Result<Vec<Uuid>, Error>;
}
