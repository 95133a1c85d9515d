use super::BroadcastService;
use crate::{
    dto::{input, output, NotificationType},
    error::Error,
    repository::{NewNotification, NotificationsRepository, UsersRepository},
    service::validate_pagination,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct BroadcastServiceImpl {
    notifications_repository: Arc<dyn NotificationsRepository>,
    users_repository: Arc<dyn UsersRepository>,
}

impl BroadcastServiceImpl {
    pub fn new(
        notifications_repository: Arc<dyn NotificationsRepository>,
        users_repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            notifications_repository,
            users_repository,
        }
    }

    fn validate_broadcast(broadcast: &input::Broadcast) -> Result<(), Error> {
        if broadcast.title.trim().is_empty() {
            return Err(Error::Validation("title must not be empty"));
        }
        if broadcast.message.trim().is_empty() {
            return Err(Error::Validation("message must not be empty"));
        }

        Ok(())
    }
}

#[async_trait]
impl BroadcastService for BroadcastServiceImpl {
    async fn send_broadcast(
        &self,
        actor_id: Uuid,
        broadcast: input::Broadcast,
    ) -> Result<output::BroadcastResult, Error> {
        tracing::info!("sending broadcast");
        tracing::trace!(?broadcast);

        Self::validate_broadcast(&broadcast)?;

        let role = broadcast
            .target_role
            .and_then(|target_role| target_role.role_filter());
        let user_ids = self.users_repository.find_active_ids(role).await?;
        if user_ids.is_empty() {
            return Err(Error::Validation("no users match target role"));
        }
        tracing::info!(count = user_ids.len(), ?role, "found broadcast recipients");

        let total_users = user_ids.len() as u64;
        let mut success_count = 0;
        let mut failed_count = 0;
        for user_id in user_ids {
            let insert_result = self
                .notifications_repository
                .insert(NewNotification {
                    id: ObjectId::new(),
                    user_id,
                    notification_type: NotificationType::SystemAnnouncement,
                    actor_id: Some(actor_id),
                    target_id: None,
                    title: broadcast.title.clone(),
                    message: broadcast.message.clone(),
                    created_at: OffsetDateTime::now_utc(),
                })
                .await;

            match insert_result {
                Ok(()) => success_count += 1,
                Err(err) => {
                    tracing::error!(%user_id, %err, "failed to deliver broadcast");
                    failed_count += 1;
                }
            }
        }
        tracing::info!(total_users, success_count, failed_count, "sent broadcast");

        Ok(output::BroadcastResult {
            total_users,
            success_count,
            failed_count,
        })
    }

    async fn get_broadcast_history(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::Page<output::BroadcastSummary>, Error> {
        tracing::info!("finding broadcast history");
        tracing::trace!(?pagination);

        validate_pagination(&pagination)?;

        let (broadcasts, total) = tokio::try_join!(
            self.notifications_repository.find_broadcasts(pagination),
            self.notifications_repository.count_broadcasts(),
        )?;

        let data = broadcasts
            .into_iter()
            .map(output::BroadcastSummary::from)
            .collect();

        Ok(output::Page {
            data,
            pagination: output::PageInfo::new(pagination, total),
        })
    }
}
