use crate::{
    dto::NotificationType,
    repository::entity::{NotificationFindEntity, NotificationIdMessageFindEntity},
};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ObjectId,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub actor_id: Option<Uuid>,
    pub target_id: Option<String>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: OffsetDateTime,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id.into(),
            notification_type: value.r#type,
            actor_id: value.actor_id.map(Uuid::from),
            target_id: value.target_id,
            title: value.title,
            message: value.message,
            is_read: value.is_read,
            created_at: value.created_at.into(),
        }
    }
}

///
/// Notification about to be inserted.
/// Id is generated by the caller, so it is known before the write.
///
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub id: ObjectId,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub actor_id: Option<Uuid>,
    pub target_id: Option<String>,
    pub title: String,
    pub message: String,
    pub created_at: OffsetDateTime,
}

///
/// Latest notification attached to a target, used by like aggregation
///
#[derive(Debug, Clone, PartialEq)]
pub struct RecentNotification {
    pub id: ObjectId,
    pub message: String,
}

impl From<NotificationIdMessageFindEntity> for RecentNotification {
    fn from(value: NotificationIdMessageFindEntity) -> Self {
        Self {
            id: value._id,
            message: value.message,
        }
    }
}
