use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResult {
    pub total_users: u64,
    pub success_count: u64,
    pub failed_count: u64,
}

#[derive(Debug, Serialize)]
pub struct BroadcastSummary {
    pub id: String,
    pub title: String,
    pub message: String,
    pub actor_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub recipient_count: u64,
    pub read_count: u64,
}

impl From<repository::BroadcastSummary> for BroadcastSummary {
    fn from(value: repository::BroadcastSummary) -> Self {
        Self {
            id: value.id.to_hex(),
            title: value.title,
            message: value.message,
            actor_id: value.actor_id,
            created_at: value.created_at,
            recipient_count: value.recipient_count,
            read_count: value.read_count,
        }
    }
}
