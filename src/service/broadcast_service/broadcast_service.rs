use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BroadcastService: Send + Sync {
    ///
    /// Send system announcement to every active user,
    /// or only to users with the target role.
    /// Failure for one user does not stop delivery to the rest.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title or message is empty
    ///     - no user matches the target role
    ///
    async fn send_broadcast(
        &self,
        actor_id: Uuid,
        broadcast: input::Broadcast,
    ) -> Result<output::BroadcastResult, Error>;

    ///
    /// Find sent broadcasts, newest first
    ///
    /// ### Errors
    /// - [Error::Validation] when pagination is out of range
    ///
    async fn get_broadcast_history(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::Page<output::BroadcastSummary>, Error>;
}
