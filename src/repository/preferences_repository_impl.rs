use super::{
    dto::Preferences,
    entity::{PreferencesFindEntity, PreferencesInsertEntity},
    Error, PreferencesRepository,
};
use crate::dto::PreferenceFlag;
use axum::async_trait;
use bson::{doc, DateTime, Document};
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use time::OffsetDateTime;
use uuid::Uuid;

pub const PREFERENCES: &str = "notification_preferences";
const INDEX_NAME_USER_ID: &str = "index_user_id";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct PreferencesRepositoryImpl {
    collection: Collection<Document>,
}

impl PreferencesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == PREFERENCES) {
            tracing::debug!(collection = PREFERENCES, "creating collection");
            database.create_collection(PREFERENCES).await?;
        }

        let collection = database.collection::<Document>(PREFERENCES);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;
        if !index_names.iter().any(|name| name == INDEX_NAME_USER_ID) {
            let index = IndexModel::builder()
                .keys(doc! { "user_id": 1 })
                .options(
                    IndexOptions::builder()
                        .name(INDEX_NAME_USER_ID.to_string())
                        .unique(true)
                        .build(),
                )
                .build();

            collection.create_index(index).await?;
            tracing::debug!(
                collection = PREFERENCES,
                index = INDEX_NAME_USER_ID,
                "created index"
            );
        }

        Ok(Self { collection })
    }
}

#[async_trait]
impl PreferencesRepository for PreferencesRepositoryImpl {
    async fn find(&self, user_id: Uuid) -> Result<Option<Preferences>, Error> {
        let preferences = self
            .collection
            .clone_with_type::<PreferencesFindEntity>()
            .find_one(doc! { "user_id": bson::Uuid::from(user_id) })
            .await?
            .map(Preferences::from);

        Ok(preferences)
    }

    async fn insert_defaults(&self, user_id: Uuid, defaults: Preferences) -> Result<(), Error> {
        let now = DateTime::from(OffsetDateTime::now_utc());
        let entity = PreferencesInsertEntity {
            user_id: user_id.into(),
            goal_liked: defaults.goal_liked,
            goal_commented: defaults.goal_commented,
            goal_referenced: defaults.goal_referenced,
            post_liked: defaults.post_liked,
            post_commented: defaults.post_commented,
            biography_commented: defaults.biography_commented,
            new_follower: defaults.new_follower,
            story_featured: defaults.story_featured,
            goal_completed: defaults.goal_completed,
            email_digest: defaults.email_digest,
            created_at: now,
            updated_at: now,
        };
        let entity = bson::to_document(&entity)?;

        // upsert with $setOnInsert leaves existing preferences untouched
        let upsert_result = self
            .collection
            .update_one(
                doc! { "user_id": bson::Uuid::from(user_id) },
                doc! { "$setOnInsert": entity },
            )
            .upsert(true)
            .await;

        match upsert_result {
            Ok(_) => Ok(()),
            Err(err) => {
                // concurrent upsert of the same user lost the race on unique index
                if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
                    if write_error.code == DUPLICATE_KEY_CODE {
                        return Ok(());
                    }
                }

                Err(Error::Mongo(err))
            }
        }
    }

    async fn update(
        &self,
        user_id: Uuid,
        changes: Vec<(PreferenceFlag, bool)>,
    ) -> Result<(), Error> {
        let mut set = doc! {
            "updated_at": DateTime::from(OffsetDateTime::now_utc()),
        };
        for (flag, enabled) in changes {
            set.insert(flag.as_ref(), enabled);
        }

        let update_result = self
            .collection
            .update_one(
                doc! { "user_id": bson::Uuid::from(user_id) },
                doc! { "$set": set },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
