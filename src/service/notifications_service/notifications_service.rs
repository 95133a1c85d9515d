use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Create notification unless recipient disabled its type
    /// or the same actor already notified about the same target recently.
    /// Duplicate check runs only when both actor and target are known.
    ///
    /// ### Returns
    /// - [output::NotificationOutcome::Created] with ID of inserted notification
    /// - [output::NotificationOutcome::Skipped] when notification was suppressed
    ///
    async fn create_notification(
        &self,
        notification: input::Notification,
        options: input::NotificationCreateOptions,
    ) -> Result<output::NotificationOutcome, Error>;

    ///
    /// Create like notification or merge it into the latest
    /// like notification of the same target within aggregation window.
    ///
    /// Merging rewrites the message to name the most recent actor
    /// and the number of other distinct actors.
    ///
    /// ### Returns
    /// - [output::NotificationOutcome::Merged] with ID of updated notification
    /// - [output::NotificationOutcome::Created] with ID of inserted notification
    /// - [output::NotificationOutcome::Skipped] when recipient disabled likes
    ///
    async fn create_like_notification_with_aggregation(
        &self,
        notification: input::LikeNotification,
    ) -> Result<output::NotificationOutcome, Error>;

    ///
    /// Find notifications that belong to the user, newest first
    ///
    /// ### Errors
    /// - [Error::Validation] when pagination is out of range
    ///
    async fn get_list(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<output::Page<output::Notification>, Error>;

    async fn get_unread_count(&self, user_id: Uuid) -> Result<output::UnreadCount, Error>;

    ///
    /// Mark notification as read
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    ///     - notification belongs to another user
    ///
    async fn mark_as_read(&self, user_id: Uuid, id: ObjectId) -> Result<(), Error>;

    async fn mark_all_as_read(&self, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Delete notification
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    ///     - notification belongs to another user
    ///
    async fn delete_notification(&self, user_id: Uuid, id: ObjectId) -> Result<(), Error>;

    async fn delete_all_notifications(&self, user_id: Uuid) -> Result<(), Error>;
}
