//!
//! Shapes of aggregation pipeline results
//!

use crate::dto::NotificationType;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CountEntity {
    pub count: u64,
}

#[derive(Deserialize)]
pub struct BasicStatsEntity {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
}

#[derive(Deserialize)]
pub struct TypeCountEntity {
    pub _id: NotificationType,
    pub count: u64,
}

#[derive(Deserialize)]
pub struct BucketCountEntity {
    pub _id: String,
    pub count: u64,
}

#[derive(Deserialize)]
pub struct SystemStatsEntity {
    pub total: u64,
    pub unread: u64,
    pub users_with_notifications: u64,
}

#[derive(Deserialize)]
pub struct TopRecipientEntity {
    pub _id: Uuid,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub notification_count: u64,
}

#[derive(Deserialize)]
pub struct BroadcastSummaryEntity {
    pub id: ObjectId,
    pub title: String,
    pub message: String,
    pub actor_id: Option<Uuid>,
    pub created_at: DateTime,
    pub recipient_count: u64,
    pub read_count: u64,
}
