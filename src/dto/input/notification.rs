use crate::dto::NotificationType;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub actor_id: Option<Uuid>,
    pub target_id: Option<String>,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationCreateOptions {
    pub skip_dedup: bool,
    pub skip_prefs_check: bool,
    ///
    /// Overrides configured dedup window
    ///
    pub dedup_minutes: Option<u32>,
}

///
/// Body of the create notification request.
/// Options are optional and default to a fully checked create.
///
#[derive(Debug, Deserialize)]
pub struct NotificationCreateRequest {
    #[serde(flatten)]
    pub notification: Notification,
    #[serde(default)]
    pub options: NotificationCreateOptions,
}
