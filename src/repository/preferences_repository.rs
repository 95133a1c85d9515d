use super::{dto::Preferences, error::Error};
use crate::dto::PreferenceFlag;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn find(&self, user_id: Uuid) -> Result<Option<Preferences>, Error>;

    ///
    /// Inserts default preferences unless the user already has them
    ///
    async fn insert_defaults(&self, user_id: Uuid, defaults: Preferences) -> Result<(), Error>;

    ///
    /// Overwrites given flags
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user has no preferences
    ///
    async fn update(&self, user_id: Uuid, changes: Vec<(PreferenceFlag, bool)>)
        -> Result<(), Error>;
}
