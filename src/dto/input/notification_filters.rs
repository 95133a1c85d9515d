use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationFilters {
    #[serde(default)]
    pub unread_only: bool,
}
