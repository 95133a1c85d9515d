use crate::{
    dto::NotificationType,
    repository::entity::{
        BasicStatsEntity, BroadcastSummaryEntity, BucketCountEntity, SystemStatsEntity,
        TopRecipientEntity, TypeCountEntity,
    },
};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicStats {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
}

impl From<BasicStatsEntity> for BasicStats {
    fn from(value: BasicStatsEntity) -> Self {
        Self {
            total: value.total,
            unread: value.unread,
            read: value.read,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub notification_type: NotificationType,
    pub count: u64,
}

impl From<TypeCountEntity> for TypeCount {
    fn from(value: TypeCountEntity) -> Self {
        Self {
            notification_type: value._id,
            count: value.count,
        }
    }
}

///
/// Number of notifications created within one time bucket.
/// Bucket is a formatted date (`YYYY-MM-DD`) or hour (`YYYY-MM-DD HH:00`).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    pub bucket: String,
    pub count: u64,
}

impl From<BucketCountEntity> for BucketCount {
    fn from(value: BucketCountEntity) -> Self {
        Self {
            bucket: value._id,
            count: value.count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemStats {
    pub total: u64,
    pub unread: u64,
    pub users_with_notifications: u64,
}

impl From<SystemStatsEntity> for SystemStats {
    fn from(value: SystemStatsEntity) -> Self {
        Self {
            total: value.total,
            unread: value.unread,
            users_with_notifications: value.users_with_notifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRecipient {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub notification_count: u64,
}

impl From<TopRecipientEntity> for TopRecipient {
    fn from(value: TopRecipientEntity) -> Self {
        Self {
            user_id: value._id.into(),
            username: value.username,
            display_name: value.display_name,
            notification_count: value.notification_count,
        }
    }
}

///
/// One broadcast, i.e. system announcements grouped by title, message and day
///
#[derive(Debug, Clone, PartialEq)]
pub struct BroadcastSummary {
    pub id: ObjectId,
    pub title: String,
    pub message: String,
    pub actor_id: Option<Uuid>,
    pub created_at: OffsetDateTime,
    pub recipient_count: u64,
    pub read_count: u64,
}

impl From<BroadcastSummaryEntity> for BroadcastSummary {
    fn from(value: BroadcastSummaryEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            message: value.message,
            actor_id: value.actor_id.map(Uuid::from),
            created_at: value.created_at.into(),
            recipient_count: value.recipient_count,
            read_count: value.read_count,
        }
    }
}
