use bson::Uuid;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserIdFindEntity {
    pub _id: Uuid,
}
