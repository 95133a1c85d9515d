use super::{
    dto::{
        BasicStats, BroadcastSummary, BucketCount, NewNotification, Notification,
        RecentNotification, SystemStats, TopRecipient, TypeCount,
    },
    error::Error,
};
use crate::dto::{input, NotificationType};
use axum::async_trait;
use bson::oid::ObjectId;
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Finds notification with the same recipient, actor, target and type
    /// created within the last `window`
    ///
    async fn find_duplicate(
        &self,
        user_id: Uuid,
        actor_id: Uuid,
        target_id: &str,
        notification_type: NotificationType,
        window: Duration,
    ) -> Result<Option<ObjectId>, Error>;

    ///
    /// Finds the most recent notification of the recipient attached
    /// to the target created within the last `window`
    ///
    async fn find_recent_by_target(
        &self,
        user_id: Uuid,
        target_id: &str,
        notification_type: NotificationType,
        window: Duration,
    ) -> Result<Option<RecentNotification>, Error>;

    ///
    /// Counts distinct actors of the recipient's notifications attached
    /// to the target created within the last `window`.
    /// Actor `excluded_actor_id` is not counted.
    ///
    async fn count_distinct_actors_by_target(
        &self,
        user_id: Uuid,
        target_id: &str,
        notification_type: NotificationType,
        window: Duration,
        excluded_actor_id: Uuid,
    ) -> Result<u64, Error>;

    async fn insert(&self, notification: NewNotification) -> Result<(), Error>;

    ///
    /// Replaces message and actor, records actor as contributor
    /// and sets created_at to `now`
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when notification does not exist
    ///
    async fn update_message(
        &self,
        id: ObjectId,
        message: &str,
        actor_id: Uuid,
        now: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Finds notification only if it belongs to the user
    ///
    async fn find_by_id_and_user(
        &self,
        id: ObjectId,
        user_id: Uuid,
    ) -> Result<Option<Notification>, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when notification does not exist
    ///
    async fn mark_read(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// ### Returns
    /// number of notifications changed from unread to read
    ///
    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when notification does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// ### Returns
    /// number of deleted notifications
    ///
    async fn delete_all(&self, user_id: Uuid) -> Result<u64, Error>;

    async fn count_by_user(&self, user_id: Uuid, unread_only: bool) -> Result<u64, Error>;

    ///
    /// Finds notifications of the user.
    /// Notifications are sorted descending by creation date.
    ///
    async fn list_by_user(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
        unread_only: bool,
    ) -> Result<Vec<Notification>, Error>;

    async fn basic_stats(&self, user_id: Uuid) -> Result<BasicStats, Error>;

    ///
    /// Notification count per type, sorted descending by count
    ///
    async fn type_stats(&self, user_id: Uuid) -> Result<Vec<TypeCount>, Error>;

    ///
    /// Notification count per day (`YYYY-MM-DD`) created since `since`,
    /// sorted ascending by day
    ///
    async fn daily_trend(
        &self,
        user_id: Uuid,
        since: OffsetDateTime,
    ) -> Result<Vec<BucketCount>, Error>;

    ///
    /// Totals of all notifications created since `since`
    ///
    async fn system_stats(&self, since: OffsetDateTime) -> Result<SystemStats, Error>;

    ///
    /// Notification count per type of all notifications created since `since`,
    /// sorted descending by count
    ///
    async fn type_stats_since(&self, since: OffsetDateTime) -> Result<Vec<TypeCount>, Error>;

    ///
    /// Notification count per hour (`YYYY-MM-DD HH:00`) of all notifications
    /// created since `since`, sorted ascending by hour
    ///
    async fn hourly_trend(&self, since: OffsetDateTime) -> Result<Vec<BucketCount>, Error>;

    ///
    /// Recipients with the most notifications created since `since`
    ///
    async fn top_recipients(
        &self,
        since: OffsetDateTime,
        limit: i64,
    ) -> Result<Vec<TopRecipient>, Error>;

    ///
    /// Finds system announcements grouped by title, message and day.
    /// Groups are sorted descending by creation date.
    ///
    async fn find_broadcasts(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<BroadcastSummary>, Error>;

    async fn count_broadcasts(&self) -> Result<u64, Error>;
}
