use crate::dto::NotificationType;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub _id: ObjectId,
    pub user_id: Uuid,
    pub r#type: NotificationType,
    pub actor_id: Option<Uuid>,
    pub actor_ids: Vec<Uuid>,
    pub target_id: Option<&'a str>,
    pub title: &'a str,
    pub message: &'a str,
    pub is_read: bool,
    pub created_at: DateTime,
}
