use crate::{
    dto::{input, output, NotificationType},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

///
/// Per-user gate deciding whether a notification type may be delivered
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesService: Send + Sync {
    ///
    /// Check if user wants to receive notifications of given type.
    /// User without stored preferences receives everything.
    /// Nothing is written to the database.
    ///
    async fn is_enabled(
        &self,
        user_id: Uuid,
        notification_type: NotificationType,
    ) -> Result<bool, Error>;

    ///
    /// Store default preferences unless user already has them
    ///
    async fn ensure_defaults(&self, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Find user preferences, creating defaults on first call
    ///
    async fn get_preferences(&self, user_id: Uuid) -> Result<output::Preferences, Error>;

    ///
    /// Change flags present in the update
    ///
    /// ### Errors
    /// - [Error::Validation] when update does not contain any known flag
    ///
    async fn update_preferences(
        &self,
        user_id: Uuid,
        update: input::PreferencesUpdate,
    ) -> Result<(), Error>;
}
