use crate::dto::LikeNotificationType;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct LikeNotification {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: LikeNotificationType,
    pub actor_id: Uuid,
    pub actor_name: String,
    pub target_id: String,
    pub target_title: String,
}
