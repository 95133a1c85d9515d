use crate::{dto::NotificationType, repository};
use bson::oid::ObjectId;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Notification {
    pub id: String,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub actor_id: Option<Uuid>,
    pub target_id: Option<String>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<repository::Notification> for Notification {
    fn from(value: repository::Notification) -> Self {
        Self {
            id: value.id.to_hex(),
            user_id: value.user_id,
            notification_type: value.notification_type,
            actor_id: value.actor_id,
            target_id: value.target_id,
            title: value.title,
            message: value.message,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

///
/// Result of a create request.
///
/// `Skipped` is a normal outcome (preference disabled or duplicate),
/// not an error.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "id", rename_all = "snake_case")]
pub enum NotificationOutcome {
    #[serde(serialize_with = "se_object_id::serialize")]
    Created(ObjectId),
    #[serde(serialize_with = "se_object_id::serialize")]
    Merged(ObjectId),
    Skipped,
}

mod se_object_id {
    use bson::oid::ObjectId;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(v: &ObjectId, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&v.to_hex())
    }
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub count: u64,
}
