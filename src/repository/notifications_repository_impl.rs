use super::{
    dto::{
        BasicStats, BroadcastSummary, BucketCount, NewNotification, Notification,
        RecentNotification, SystemStats, TopRecipient, TypeCount,
    },
    entity::{
        BasicStatsEntity, BroadcastSummaryEntity, BucketCountEntity, CountEntity,
        NotificationFindEntity, NotificationIdFindEntity, NotificationIdMessageFindEntity,
        NotificationInsertEntity, SystemStatsEntity, TopRecipientEntity, TypeCountEntity,
    },
    Error, NotificationsRepository, USERS,
};
use crate::dto::{input, NotificationType};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

pub const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_USER_ID_CREATED_AT: &str = "index_user_id_created_at";
const INDEX_NAME_USER_ID_TARGET_ID_TYPE: &str = "index_user_id_target_id_type_created_at";
const INDEX_NAME_CREATED_AT: &str = "index_created_at";

const SYSTEM_ANNOUNCEMENT: &str = "system_announcement";
const DAY_FORMAT: &str = "%Y-%m-%d";
const HOUR_FORMAT: &str = "%Y-%m-%d %H:00";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            tracing::debug!(collection = NOTIFICATIONS, "creating collection");
            database.create_collection(NOTIFICATIONS).await?;
        }

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        let indexes = [
            (
                INDEX_NAME_USER_ID_CREATED_AT,
                doc! {
                    "user_id": 1,
                    "created_at": -1,
                },
            ),
            (
                INDEX_NAME_USER_ID_TARGET_ID_TYPE,
                doc! {
                    "user_id": 1,
                    "target_id": 1,
                    "type": 1,
                    "created_at": -1,
                },
            ),
            (
                INDEX_NAME_CREATED_AT,
                doc! {
                    "created_at": -1,
                },
            ),
        ];

        for (name, keys) in indexes {
            if index_names.iter().any(|index_name| index_name == name) {
                continue;
            }

            Self::create_index(&collection, name, keys).await?;
            tracing::debug!(collection = NOTIFICATIONS, index = name, "created index");
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        name: &str,
        keys: Document,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.database.collection::<T>(NOTIFICATIONS)
    }

    fn created_after(window: Duration) -> DateTime {
        DateTime::from(OffsetDateTime::now_utc() - window)
    }

    async fn bucket_counts(
        &self,
        filter: Document,
        format: &str,
    ) -> Result<Vec<BucketCount>, Error> {
        let buckets = self
            .collection::<Document>()
            .aggregate([
                doc! { "$match": filter },
                doc! {
                    "$group": {
                        "_id": {
                            "$dateToString": {
                                "format": format,
                                "date": "$created_at",
                            }
                        },
                        "count": { "$sum": 1 },
                    }
                },
                doc! { "$sort": { "_id": 1 } },
            ])
            .await?
            .with_type::<BucketCountEntity>()
            .map_ok(BucketCount::from)
            .try_collect()
            .await?;

        Ok(buckets)
    }

    async fn type_counts(&self, filter: Document) -> Result<Vec<TypeCount>, Error> {
        let counts = self
            .collection::<Document>()
            .aggregate([
                doc! { "$match": filter },
                doc! {
                    "$group": {
                        "_id": "$type",
                        "count": { "$sum": 1 },
                    }
                },
                doc! { "$sort": { "count": -1, "_id": 1 } },
            ])
            .await?
            .with_type::<TypeCountEntity>()
            .map_ok(TypeCount::from)
            .try_collect()
            .await?;

        Ok(counts)
    }

    fn broadcast_group_stage() -> Document {
        doc! {
            "$group": {
                "_id": {
                    "title": "$title",
                    "message": "$message",
                    "day": {
                        "$dateToString": {
                            "format": DAY_FORMAT,
                            "date": "$created_at",
                        }
                    },
                },
                "id": { "$min": "$_id" },
                "title": { "$first": "$title" },
                "message": { "$first": "$message" },
                "actor_id": { "$first": "$actor_id" },
                "created_at": { "$min": "$created_at" },
                "recipient_count": { "$sum": 1 },
                "read_count": {
                    "$sum": { "$cond": ["$is_read", 1, 0] }
                },
            }
        }
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn find_duplicate(
        &self,
        user_id: Uuid,
        actor_id: Uuid,
        target_id: &str,
        notification_type: NotificationType,
        window: Duration,
    ) -> Result<Option<ObjectId>, Error> {
        let entity = self
            .collection::<NotificationIdFindEntity>()
            .find_one(doc! {
                "user_id": bson::Uuid::from(user_id),
                "actor_id": bson::Uuid::from(actor_id),
                "target_id": target_id,
                "type": notification_type.as_ref(),
                "created_at": { "$gt": Self::created_after(window) },
            })
            .projection(doc! { "_id": 1 })
            .await?;

        Ok(entity.map(|entity| entity._id))
    }

    async fn find_recent_by_target(
        &self,
        user_id: Uuid,
        target_id: &str,
        notification_type: NotificationType,
        window: Duration,
    ) -> Result<Option<RecentNotification>, Error> {
        let entity = self
            .collection::<NotificationIdMessageFindEntity>()
            .find_one(doc! {
                "user_id": bson::Uuid::from(user_id),
                "target_id": target_id,
                "type": notification_type.as_ref(),
                "created_at": { "$gt": Self::created_after(window) },
            })
            .projection(doc! {
                "_id": 1,
                "message": 1,
            })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(entity.map(RecentNotification::from))
    }

    async fn count_distinct_actors_by_target(
        &self,
        user_id: Uuid,
        target_id: &str,
        notification_type: NotificationType,
        window: Duration,
        excluded_actor_id: Uuid,
    ) -> Result<u64, Error> {
        let count = self
            .collection::<Document>()
            .aggregate([
                doc! {
                    "$match": {
                        "user_id": bson::Uuid::from(user_id),
                        "target_id": target_id,
                        "type": notification_type.as_ref(),
                        "created_at": { "$gt": Self::created_after(window) },
                    }
                },
                doc! { "$unwind": "$actor_ids" },
                doc! {
                    "$match": {
                        "actor_ids": { "$ne": bson::Uuid::from(excluded_actor_id) },
                    }
                },
                doc! { "$group": { "_id": "$actor_ids" } },
                doc! { "$count": "count" },
            ])
            .await?
            .with_type::<CountEntity>()
            .try_next()
            .await?
            .map(|entity| entity.count)
            .unwrap_or(0);

        Ok(count)
    }

    async fn insert(&self, notification: NewNotification) -> Result<(), Error> {
        let actor_id = notification.actor_id.map(bson::Uuid::from);
        let insert_entity = NotificationInsertEntity {
            _id: notification.id,
            user_id: notification.user_id.into(),
            r#type: notification.notification_type,
            actor_id,
            actor_ids: actor_id.into_iter().collect(),
            target_id: notification.target_id.as_deref(),
            title: &notification.title,
            message: &notification.message,
            is_read: false,
            created_at: notification.created_at.into(),
        };

        self.collection::<NotificationInsertEntity>()
            .insert_one(&insert_entity)
            .await?;

        Ok(())
    }

    async fn update_message(
        &self,
        id: ObjectId,
        message: &str,
        actor_id: Uuid,
        now: OffsetDateTime,
    ) -> Result<(), Error> {
        let actor_id = bson::Uuid::from(actor_id);

        let update_result = self
            .collection::<Document>()
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "message": message,
                        "actor_id": actor_id,
                        "created_at": DateTime::from(now),
                    },
                    "$addToSet": {
                        "actor_ids": actor_id,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn find_by_id_and_user(
        &self,
        id: ObjectId,
        user_id: Uuid,
    ) -> Result<Option<Notification>, Error> {
        let notification = self
            .collection::<NotificationFindEntity>()
            .find_one(doc! {
                "_id": id,
                "user_id": bson::Uuid::from(user_id),
            })
            .await?
            .map(Notification::from);

        Ok(notification)
    }

    async fn mark_read(&self, id: ObjectId) -> Result<(), Error> {
        let update_result = self
            .collection::<Document>()
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": { "is_read": true }
                },
            )
            .await?;

        // matched_count instead of modified_count because marking
        // already read notification doesn't count as modification
        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, Error> {
        let update_result = self
            .collection::<Document>()
            .update_many(
                doc! {
                    "user_id": bson::Uuid::from(user_id),
                    "is_read": false,
                },
                doc! {
                    "$set": { "is_read": true }
                },
            )
            .await?;

        Ok(update_result.modified_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .collection::<Document>()
            .delete_one(doc! { "_id": id })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete_all(&self, user_id: Uuid) -> Result<u64, Error> {
        let delete_result = self
            .collection::<Document>()
            .delete_many(doc! { "user_id": bson::Uuid::from(user_id) })
            .await?;

        Ok(delete_result.deleted_count)
    }

    async fn count_by_user(&self, user_id: Uuid, unread_only: bool) -> Result<u64, Error> {
        let mut filter = doc! { "user_id": bson::Uuid::from(user_id) };
        if unread_only {
            filter.insert("is_read", false);
        }

        let count = self
            .collection::<Document>()
            .count_documents(filter)
            .await?;

        Ok(count)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        pagination: input::Pagination,
        unread_only: bool,
    ) -> Result<Vec<Notification>, Error> {
        let mut filter = doc! { "user_id": bson::Uuid::from(user_id) };
        if unread_only {
            filter.insert("is_read", false);
        }

        let notifications = self
            .collection::<NotificationFindEntity>()
            .find(filter)
            .sort(doc! {
                "created_at": -1,
                "_id": -1,
            })
            .skip(pagination.offset())
            .limit(i64::from(pagination.limit))
            .await?
            .map_ok(Notification::from)
            .try_collect()
            .await?;

        Ok(notifications)
    }

    async fn basic_stats(&self, user_id: Uuid) -> Result<BasicStats, Error> {
        let stats = self
            .collection::<Document>()
            .aggregate([
                doc! {
                    "$match": { "user_id": bson::Uuid::from(user_id) }
                },
                doc! {
                    "$group": {
                        "_id": null,
                        "total": { "$sum": 1 },
                        "unread": {
                            "$sum": { "$cond": ["$is_read", 0, 1] }
                        },
                        "read": {
                            "$sum": { "$cond": ["$is_read", 1, 0] }
                        },
                    }
                },
            ])
            .await?
            .with_type::<BasicStatsEntity>()
            .try_next()
            .await?
            .map(BasicStats::from)
            .unwrap_or_default();

        Ok(stats)
    }

    async fn type_stats(&self, user_id: Uuid) -> Result<Vec<TypeCount>, Error> {
        self.type_counts(doc! { "user_id": bson::Uuid::from(user_id) })
            .await
    }

    async fn daily_trend(
        &self,
        user_id: Uuid,
        since: OffsetDateTime,
    ) -> Result<Vec<BucketCount>, Error> {
        self.bucket_counts(
            doc! {
                "user_id": bson::Uuid::from(user_id),
                "created_at": { "$gte": DateTime::from(since) },
            },
            DAY_FORMAT,
        )
        .await
    }

    async fn system_stats(&self, since: OffsetDateTime) -> Result<SystemStats, Error> {
        let stats = self
            .collection::<Document>()
            .aggregate([
                doc! {
                    "$match": {
                        "created_at": { "$gt": DateTime::from(since) }
                    }
                },
                doc! {
                    "$group": {
                        "_id": null,
                        "total": { "$sum": 1 },
                        "unread": {
                            "$sum": { "$cond": ["$is_read", 0, 1] }
                        },
                        "user_ids": { "$addToSet": "$user_id" },
                    }
                },
                doc! {
                    "$project": {
                        "total": 1,
                        "unread": 1,
                        "users_with_notifications": { "$size": "$user_ids" },
                    }
                },
            ])
            .await?
            .with_type::<SystemStatsEntity>()
            .try_next()
            .await?
            .map(SystemStats::from)
            .unwrap_or_default();

        Ok(stats)
    }

    async fn type_stats_since(&self, since: OffsetDateTime) -> Result<Vec<TypeCount>, Error> {
        self.type_counts(doc! {
            "created_at": { "$gt": DateTime::from(since) }
        })
        .await
    }

    async fn hourly_trend(&self, since: OffsetDateTime) -> Result<Vec<BucketCount>, Error> {
        self.bucket_counts(
            doc! {
                "created_at": { "$gt": DateTime::from(since) }
            },
            HOUR_FORMAT,
        )
        .await
    }

    async fn top_recipients(
        &self,
        since: OffsetDateTime,
        limit: i64,
    ) -> Result<Vec<TopRecipient>, Error> {
        let recipients = self
            .collection::<Document>()
            .aggregate([
                doc! {
                    "$match": {
                        "created_at": { "$gt": DateTime::from(since) }
                    }
                },
                doc! {
                    "$group": {
                        "_id": "$user_id",
                        "notification_count": { "$sum": 1 },
                    }
                },
                doc! { "$sort": { "notification_count": -1, "_id": 1 } },
                doc! { "$limit": limit },
                doc! {
                    "$lookup": {
                        "from": USERS,
                        "localField": "_id",
                        "foreignField": "_id",
                        "as": "user",
                    }
                },
                doc! {
                    "$project": {
                        "notification_count": 1,
                        "username": { "$first": "$user.username" },
                        "display_name": { "$first": "$user.display_name" },
                    }
                },
            ])
            .await?
            .with_type::<TopRecipientEntity>()
            .map_ok(TopRecipient::from)
            .try_collect()
            .await?;

        Ok(recipients)
    }

    async fn find_broadcasts(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<BroadcastSummary>, Error> {
        let skip = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);

        let broadcasts = self
            .collection::<Document>()
            .aggregate([
                doc! {
                    "$match": { "type": SYSTEM_ANNOUNCEMENT }
                },
                Self::broadcast_group_stage(),
                doc! { "$sort": { "created_at": -1, "id": -1 } },
                doc! { "$skip": skip },
                doc! { "$limit": i64::from(pagination.limit) },
            ])
            .await?
            .with_type::<BroadcastSummaryEntity>()
            .map_ok(BroadcastSummary::from)
            .try_collect()
            .await?;

        Ok(broadcasts)
    }

    async fn count_broadcasts(&self) -> Result<u64, Error> {
        let count = self
            .collection::<Document>()
            .aggregate([
                doc! {
                    "$match": { "type": SYSTEM_ANNOUNCEMENT }
                },
                Self::broadcast_group_stage(),
                doc! { "$count": "count" },
            ])
            .await?
            .with_type::<CountEntity>()
            .try_next()
            .await?
            .map(|entity| entity.count)
            .unwrap_or(0);

        Ok(count)
    }
}
