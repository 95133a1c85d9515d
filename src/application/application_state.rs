use super::ApplicationEnv;
use crate::{
    repository::{NotificationsRepositoryImpl, PreferencesRepositoryImpl, UsersRepositoryImpl},
    service::{
        BroadcastService, BroadcastServiceImpl, NotificationsService, NotificationsServiceConfig,
        NotificationsServiceImpl, PreferencesService, PreferencesServiceImpl, StatsService,
        StatsServiceImpl,
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub preferences_service: Arc<dyn PreferencesService>,
    pub stats_service: Arc<dyn StatsService>,
    pub broadcast_service: Arc<dyn BroadcastService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = Arc::new(NotificationsRepositoryImpl::new(db.clone()).await?);
    let preferences_repository = Arc::new(PreferencesRepositoryImpl::new(db.clone()).await?);
    let users_repository = Arc::new(UsersRepositoryImpl::new(db));

    tracing::info!("creating services");
    let preferences_service = Arc::new(PreferencesServiceImpl::new(preferences_repository));
    let notifications_service = Arc::new(NotificationsServiceImpl::new(
        NotificationsServiceConfig {
            dedup_window: env.dedup_window,
            aggregation_window: env.aggregation_window,
        },
        notifications_repository.clone(),
        preferences_service.clone(),
    ));
    let stats_service = Arc::new(StatsServiceImpl::new(notifications_repository.clone()));
    let broadcast_service = Arc::new(BroadcastServiceImpl::new(
        notifications_repository,
        users_repository,
    ));

    let state = ApplicationState {
        notifications_service,
        preferences_service,
        stats_service,
        broadcast_service,
    };
    let state_to_close = ApplicationStateToClose { db_client };

    Ok((state, state_to_close))
}
