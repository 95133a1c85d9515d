use super::{
    like_message::{like_message, like_title},
    NotificationsService, NotificationsServiceConfig,
};
use crate::{
    dto::{input, output, NotificationType},
    error::Error,
    repository::{self, NewNotification, NotificationsRepository},
    service::{validate_pagination, PreferencesService},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotificationsRepository>,
    preferences_service: Arc<dyn PreferencesService>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
        preferences_service: Arc<dyn PreferencesService>,
    ) -> Self {
        Self {
            config,
            repository,
            preferences_service,
        }
    }

    fn dedup_window(&self, options: &input::NotificationCreateOptions) -> Duration {
        options
            .dedup_minutes
            .map(|minutes| Duration::from_secs(u64::from(minutes) * 60))
            .unwrap_or(self.config.dedup_window)
    }

    async fn find_duplicate(
        &self,
        notification: &input::Notification,
        window: Duration,
    ) -> Result<Option<ObjectId>, Error> {
        let (Some(actor_id), Some(target_id)) = (notification.actor_id, &notification.target_id)
        else {
            return Ok(None);
        };

        let duplicate = self
            .repository
            .find_duplicate(
                notification.user_id,
                actor_id,
                target_id,
                notification.notification_type,
                window,
            )
            .await?;

        Ok(duplicate)
    }

    ///
    /// ### Returns
    /// ID of merged notification or `None` when there is nothing to merge into
    ///
    async fn try_merge_like(
        &self,
        notification: &input::LikeNotification,
    ) -> Result<Option<ObjectId>, Error> {
        let notification_type = NotificationType::from(notification.notification_type);
        let window = self.config.aggregation_window;

        let Some(recent) = self
            .repository
            .find_recent_by_target(
                notification.user_id,
                &notification.target_id,
                notification_type,
                window,
            )
            .await?
        else {
            return Ok(None);
        };
        tracing::debug!(id = %recent.id, message = recent.message, "found recent like");

        let other_actors = self
            .repository
            .count_distinct_actors_by_target(
                notification.user_id,
                &notification.target_id,
                notification_type,
                window,
                notification.actor_id,
            )
            .await?;

        let message = like_message(
            &notification.actor_name,
            other_actors,
            notification.notification_type.target_kind(),
            &notification.target_title,
        );

        let update_result = self
            .repository
            .update_message(
                recent.id,
                &message,
                notification.actor_id,
                OffsetDateTime::now_utc(),
            )
            .await;

        match update_result {
            Ok(()) => Ok(Some(recent.id)),
            Err(repository::Error::NoDocumentUpdated) => {
                tracing::warn!(id = %recent.id, "notification removed before merge");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_owned(&self, user_id: Uuid, id: ObjectId) -> Result<(), Error> {
        self.repository
            .find_by_id_and_user(id, user_id)
            .await?
            .ok_or(Error::NotificationNotExist)?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn create_notification(
        &self,
        notification: input::Notification,
        options: input::NotificationCreateOptions,
    ) -> Result<output::NotificationOutcome, Error> {
        tracing::info!(
            notification_type = notification.notification_type.as_ref(),
            "creating notification"
        );
        tracing::trace!(?notification, ?options);

        if !options.skip_prefs_check {
            let enabled = self
                .preferences_service
                .is_enabled(notification.user_id, notification.notification_type)
                .await?;
            if !enabled {
                tracing::info!("notification type disabled by user");
                return Ok(output::NotificationOutcome::Skipped);
            }
        }

        if !options.skip_dedup {
            let window = self.dedup_window(&options);
            if let Some(duplicate_id) = self.find_duplicate(&notification, window).await? {
                tracing::info!(%duplicate_id, "duplicate notification");
                return Ok(output::NotificationOutcome::Skipped);
            }
        }

        // Check and insert are not atomic.
        // Concurrent calls with the same key can both insert.
        let id = ObjectId::new();
        self.repository
            .insert(NewNotification {
                id,
                user_id: notification.user_id,
                notification_type: notification.notification_type,
                actor_id: notification.actor_id,
                target_id: notification.target_id,
                title: notification.title,
                message: notification.message,
                created_at: OffsetDateTime::now_utc(),
            })
            .await?;
        tracing::info!(%id, "created notification");

        Ok(output::NotificationOutcome::Created(id))
    }

    async fn create_like_notification_with_aggregation(
        &self,
        notification: input::LikeNotification,
    ) -> Result<output::NotificationOutcome, Error> {
        tracing::info!(target_id = notification.target_id, "creating like notification");
        tracing::trace!(?notification);

        let notification_type = NotificationType::from(notification.notification_type);

        let enabled = self
            .preferences_service
            .is_enabled(notification.user_id, notification_type)
            .await?;
        if !enabled {
            tracing::info!("notification type disabled by user");
            return Ok(output::NotificationOutcome::Skipped);
        }

        if let Some(id) = self.try_merge_like(&notification).await? {
            tracing::info!(%id, "merged like notification");
            return Ok(output::NotificationOutcome::Merged(id));
        }

        let target_kind = notification.notification_type.target_kind();
        let message = like_message(
            &notification.actor_name,
            0,
            target_kind,
            &notification.target_title,
        );

        self.create_notification(
            input::Notification {
                user_id: notification.user_id,
                notification_type,
                actor_id: Some(notification.actor_id),
                target_id: Some(notification.target_id),
                title: like_title(target_kind),
                message,
            },
            input::NotificationCreateOptions {
                skip_dedup: true,
                skip_prefs_check: true,
                dedup_minutes: None,
            },
        )
        .await
    }

    async fn get_list(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<output::Page<output::Notification>, Error> {
        tracing::info!("finding notifications");
        tracing::trace!(?pagination, ?filters);

        validate_pagination(&pagination)?;

        let (notifications, total) = tokio::try_join!(
            self.repository
                .list_by_user(user_id, pagination, filters.unread_only),
            self.repository.count_by_user(user_id, filters.unread_only),
        )?;
        tracing::info!(count = notifications.len(), total, "found notifications");

        let data = notifications
            .into_iter()
            .map(output::Notification::from)
            .collect();

        Ok(output::Page {
            data,
            pagination: output::PageInfo::new(pagination, total),
        })
    }

    async fn get_unread_count(&self, user_id: Uuid) -> Result<output::UnreadCount, Error> {
        let count = self.repository.count_by_user(user_id, true).await?;

        Ok(output::UnreadCount { count })
    }

    async fn mark_as_read(&self, user_id: Uuid, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "marking notification as read");

        self.find_owned(user_id, id).await?;
        self.repository
            .mark_read(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;
        tracing::info!(%id, "marked notification as read");

        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("marking all notifications as read");

        let count = self.repository.mark_all_read(user_id).await?;
        tracing::info!(count, "marked notifications as read");

        Ok(())
    }

    async fn delete_notification(&self, user_id: Uuid, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "deleting notification");

        self.find_owned(user_id, id).await?;
        self.repository
            .delete(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;
        tracing::info!(%id, "deleted notification");

        Ok(())
    }

    async fn delete_all_notifications(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("deleting all notifications");

        let count = self.repository.delete_all(user_id).await?;
        tracing::info!(count, "deleted notifications");

        Ok(())
    }
}
