use super::PreferencesService;
use crate::{
    dto::{input, output, NotificationType},
    error::Error,
    repository::{self, PreferencesRepository},
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct PreferencesServiceImpl {
    repository: Arc<dyn PreferencesRepository>,
}

impl PreferencesServiceImpl {
    pub fn new(repository: Arc<dyn PreferencesRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PreferencesService for PreferencesServiceImpl {
    async fn is_enabled(
        &self,
        user_id: Uuid,
        notification_type: NotificationType,
    ) -> Result<bool, Error> {
        let Some(flag) = notification_type.preference_flag() else {
            return Ok(true);
        };

        let enabled = self
            .repository
            .find(user_id)
            .await?
            .map_or(true, |preferences| preferences.is_enabled(flag));
        tracing::debug!(flag = flag.as_ref(), enabled, "checked preference");

        Ok(enabled)
    }

    async fn ensure_defaults(&self, user_id: Uuid) -> Result<(), Error> {
        self.repository
            .insert_defaults(user_id, repository::Preferences::default())
            .await?;

        Ok(())
    }

    async fn get_preferences(&self, user_id: Uuid) -> Result<output::Preferences, Error> {
        tracing::info!("finding preferences");

        if let Some(preferences) = self.repository.find(user_id).await? {
            return Ok(preferences.into());
        }

        tracing::info!("creating default preferences");
        self.ensure_defaults(user_id).await?;

        let preferences = self
            .repository
            .find(user_id)
            .await?
            .unwrap_or_default();

        Ok(preferences.into())
    }

    async fn update_preferences(
        &self,
        user_id: Uuid,
        update: input::PreferencesUpdate,
    ) -> Result<(), Error> {
        tracing::info!("updating preferences");
        tracing::trace!(?update);

        let changes = update.changes();
        if changes.is_empty() {
            return Err(Error::Validation("no preferences to update"));
        }

        self.ensure_defaults(user_id).await?;
        self.repository.update(user_id, changes).await?;
        tracing::info!("updated preferences");

        Ok(())
    }
}
