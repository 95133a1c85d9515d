use crate::dto::NotificationType;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,
    pub user_id: Uuid,
    pub r#type: NotificationType,
    pub actor_id: Option<Uuid>,
    pub target_id: Option<String>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime,
}

#[derive(Deserialize)]
pub struct NotificationIdFindEntity {
    pub _id: ObjectId,
}

#[derive(Deserialize)]
pub struct NotificationIdMessageFindEntity {
    pub _id: ObjectId,
    pub message: String,
}
