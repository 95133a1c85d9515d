use super::{entity::UserIdFindEntity, Error, UsersRepository};
use axum::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use uuid::Uuid;

pub const USERS: &str = "users";

///
/// Users collection is owned by the account service,
/// so no collection or index is created here
///
pub struct UsersRepositoryImpl {
    collection: Collection<UserIdFindEntity>,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection(USERS),
        }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_active_ids(&self, role: Option<&'static str>) -> Result<Vec<Uuid>, Error> {
        let mut filter = doc! { "is_active": true };
        if let Some(role) = role {
            filter.insert("role", role);
        }

        let ids = self
            .collection
            .find(filter)
            .projection(doc! { "_id": 1 })
            .await?
            .map_ok(|entity| Uuid::from(entity._id))
            .try_collect()
            .await?;

        Ok(ids)
    }
}
