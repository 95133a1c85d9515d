use crate::{dto::output, error::Error};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsService: Send + Sync {
    ///
    /// Summarize notifications of the user.
    /// Daily trend covers last 7 days starting at midnight UTC.
    ///
    async fn get_stats(&self, user_id: Uuid) -> Result<output::NotificationStats, Error>;

    ///
    /// Summarize notifications of all users created within last 24 hours
    ///
    async fn get_admin_stats(&self) -> Result<output::AdminStats, Error>;
}
