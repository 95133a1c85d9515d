use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{require_all_roles, Role, User},
    dto::{input, output},
    error::Error,
    service::{BroadcastService, NotificationsService, PreferencesService, StatsService},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route(
            "/api/v1/notifications",
            post(create_notification)
                .get(get_notifications)
                .delete(delete_all_notifications),
        )
        .route(
            "/api/v1/notifications/likes",
            post(create_like_notification),
        )
        .route(
            "/api/v1/notifications/unread-count",
            get(get_unread_count),
        )
        .route("/api/v1/notifications/read", put(mark_all_as_read))
        .route("/api/v1/notifications/stats", get(get_stats))
        .route(
            "/api/v1/notifications/preferences",
            get(get_preferences).patch(update_preferences),
        )
        .route(
            "/api/v1/notifications/:id",
            axum::routing::delete(delete_notification),
        )
        .route("/api/v1/notifications/:id/read", put(mark_as_read))
        .route(
            "/api/v1/admin/notifications/broadcast",
            post(send_broadcast),
        )
        .route(
            "/api/v1/admin/notifications/broadcasts",
            get(get_broadcast_history),
        )
        .route("/api/v1/admin/notifications/stats", get(get_admin_stats))
        .route_layer(application_middleware.auth.clone())
}

///
/// Malformed id can't point to any notification
///
fn parse_notification_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::NotificationNotExist)
}

fn outcome_status(outcome: &output::NotificationOutcome) -> StatusCode {
    match outcome {
        output::NotificationOutcome::Created(_) => StatusCode::CREATED,
        output::NotificationOutcome::Merged(_) | output::NotificationOutcome::Skipped => {
            StatusCode::OK
        }
    }
}

async fn create_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Json(request): Json<input::NotificationCreateRequest>,
) -> Result<(StatusCode, Json<output::NotificationOutcome>), Error> {
    require_all_roles(&user, &[Role::ProduceNotifications])?;

    let outcome = service
        .create_notification(request.notification, request.options)
        .await?;

    Ok((outcome_status(&outcome), Json(outcome)))
}

async fn create_like_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Json(notification): Json<input::LikeNotification>,
) -> Result<(StatusCode, Json<output::NotificationOutcome>), Error> {
    require_all_roles(&user, &[Role::ProduceNotifications])?;

    let outcome = service
        .create_like_notification_with_aggregation(notification)
        .await?;

    Ok((outcome_status(&outcome), Json(outcome)))
}

async fn get_notifications(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Query(pagination): Query<input::Pagination>,
    Query(filters): Query<input::NotificationFilters>,
) -> Result<Json<output::Page<output::Notification>>, Error> {
    let page = service.get_list(user.id, pagination, filters).await?;

    Ok(Json(page))
}

async fn get_unread_count(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::UnreadCount>, Error> {
    let unread_count = service.get_unread_count(user.id).await?;

    Ok(Json(unread_count))
}

async fn mark_all_as_read(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
) -> Result<StatusCode, Error> {
    service.mark_all_as_read(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn mark_as_read(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_notification_id(&id)?;
    service.mark_as_read(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_notification_id(&id)?;
    service.delete_notification(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_all_notifications(
    State(service): State<Arc<dyn NotificationsService>>,
    Extension(user): Extension<User>,
) -> Result<StatusCode, Error> {
    service.delete_all_notifications(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_stats(
    State(service): State<Arc<dyn StatsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::NotificationStats>, Error> {
    let stats = service.get_stats(user.id).await?;

    Ok(Json(stats))
}

async fn get_preferences(
    State(service): State<Arc<dyn PreferencesService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::Preferences>, Error> {
    let preferences = service.get_preferences(user.id).await?;

    Ok(Json(preferences))
}

async fn update_preferences(
    State(service): State<Arc<dyn PreferencesService>>,
    Extension(user): Extension<User>,
    Json(update): Json<input::PreferencesUpdate>,
) -> Result<StatusCode, Error> {
    service.update_preferences(user.id, update).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn send_broadcast(
    State(service): State<Arc<dyn BroadcastService>>,
    Extension(user): Extension<User>,
    Json(broadcast): Json<input::Broadcast>,
) -> Result<Json<output::BroadcastResult>, Error> {
    require_all_roles(&user, &[Role::Admin])?;

    let result = service.send_broadcast(user.id, broadcast).await?;

    Ok(Json(result))
}

async fn get_broadcast_history(
    State(service): State<Arc<dyn BroadcastService>>,
    Extension(user): Extension<User>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<output::Page<output::BroadcastSummary>>, Error> {
    require_all_roles(&user, &[Role::Admin])?;

    let history = service.get_broadcast_history(pagination).await?;

    Ok(Json(history))
}

async fn get_admin_stats(
    State(service): State<Arc<dyn StatsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::AdminStats>, Error> {
    require_all_roles(&user, &[Role::Admin])?;

    let stats = service.get_admin_stats().await?;

    Ok(Json(stats))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        application::create_application,
        auth::{GatewayIdentityValidator, USER_ID_HEADER, USER_ROLES_HEADER},
        service::{
            MockBroadcastService, MockNotificationsService, MockPreferencesService,
            MockStatsService,
        },
    };
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request},
    };
    use mockall::predicate;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::{
        limit::RequestBodyLimitLayer, trace::TraceLayer,
        validate_request::ValidateRequestHeaderLayer,
    };
    use uuid::Uuid;

    const USER_ID: &str = "379a73e6-91dd-48a3-a652-002d34c43670";

    struct Mocks {
        notifications_service: MockNotificationsService,
        preferences_service: MockPreferencesService,
        stats_service: MockStatsService,
        broadcast_service: MockBroadcastService,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                notifications_service: MockNotificationsService::new(),
                preferences_service: MockPreferencesService::new(),
                stats_service: MockStatsService::new(),
                broadcast_service: MockBroadcastService::new(),
            }
        }

        fn into_router(self) -> Router {
            let state = ApplicationState {
                notifications_service: Arc::new(self.notifications_service),
                preferences_service: Arc::new(self.preferences_service),
                stats_service: Arc::new(self.stats_service),
                broadcast_service: Arc::new(self.broadcast_service),
            };
            let middleware = ApplicationMiddleware {
                auth: ValidateRequestHeaderLayer::custom(GatewayIdentityValidator::new()),
                body_limit: RequestBodyLimitLayer::new(4096),
                trace: TraceLayer::new_for_http(),
            };

            create_application(state, middleware)
        }
    }

    fn request(method: Method, uri: &str, roles: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(USER_ID_HEADER, USER_ID)
            .header(USER_ROLES_HEADER, roles);

        match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn comment_body() -> Value {
        json!({
            "user_id": Uuid::new_v4(),
            "type": "goal_commented",
            "actor_id": Uuid::new_v4(),
            "target_id": "goal-1",
            "title": "New comment",
            "message": "Alex commented on your goal"
        })
    }

    #[tokio::test]
    async fn missing_identity_unauthorized() {
        let router = Mocks::new().into_router();

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/notifications")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_notification_missing_role() {
        let mut mocks = Mocks::new();
        mocks.notifications_service.expect_create_notification().never();
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/notifications",
                "",
                Some(comment_body()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn create_notification_created() {
        let id = ObjectId::new();

        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_create_notification()
            .withf(|notification, options| {
                notification.target_id.as_deref() == Some("goal-1")
                    && !options.skip_dedup
                    && !options.skip_prefs_check
            })
            .return_once(move |_, _| Ok(output::NotificationOutcome::Created(id)));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/notifications",
                Role::ProduceNotifications.as_ref(),
                Some(comment_body()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response_json(response).await,
            json!({ "status": "created", "id": id.to_hex() })
        );
    }

    #[tokio::test]
    async fn create_like_notification_skipped() {
        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_create_like_notification_with_aggregation()
            .return_once(|_| Ok(output::NotificationOutcome::Skipped));
        let router = mocks.into_router();

        let body = json!({
            "user_id": Uuid::new_v4(),
            "type": "goal_liked",
            "actor_id": Uuid::new_v4(),
            "actor_name": "Alex",
            "target_id": "goal-1",
            "target_title": "Send the roof"
        });
        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/notifications/likes",
                Role::ProduceNotifications.as_ref(),
                Some(body),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({ "status": "skipped" }));
    }

    #[tokio::test]
    async fn create_like_notification_rejects_other_types() {
        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_create_like_notification_with_aggregation()
            .never();
        let router = mocks.into_router();

        let body = json!({
            "user_id": Uuid::new_v4(),
            "type": "goal_commented",
            "actor_id": Uuid::new_v4(),
            "actor_name": "Alex",
            "target_id": "goal-1",
            "target_title": "Send the roof"
        });
        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/notifications/likes",
                Role::ProduceNotifications.as_ref(),
                Some(body),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn get_notifications_query() {
        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_get_list()
            .withf(|user_id, pagination, filters| {
                *user_id == Uuid::parse_str(USER_ID).unwrap()
                    && *pagination == input::Pagination { page: 3, limit: 5 }
                    && filters.unread_only
            })
            .return_once(|_, pagination, _| {
                Ok(output::Page {
                    data: vec![],
                    pagination: output::PageInfo::new(pagination, 0),
                })
            });
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/notifications?page=3&limit=5&unread_only=true",
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["pagination"]["page"], 3);
        assert_eq!(json["pagination"]["total_pages"], 0);
    }

    #[tokio::test]
    async fn get_notifications_invalid_limit() {
        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_get_list()
            .return_once(|_, _, _| Err(Error::Validation("limit must be between 1 and 100")));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/notifications?limit=500",
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mark_as_read_malformed_id() {
        let mut mocks = Mocks::new();
        mocks.notifications_service.expect_mark_as_read().never();
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::PUT,
                "/api/v1/notifications/not-an-id/read",
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mark_as_read_not_owned() {
        let id = ObjectId::new();

        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_mark_as_read()
            .with(
                predicate::eq(Uuid::parse_str(USER_ID).unwrap()),
                predicate::eq(id),
            )
            .return_once(|_, _| Err(Error::NotificationNotExist));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::PUT,
                &format!("/api/v1/notifications/{}/read", id.to_hex()),
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mark_all_as_read_no_content() {
        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_mark_all_as_read()
            .return_once(|_| Ok(()));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(Method::PUT, "/api/v1/notifications/read", "", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_notification_no_content() {
        let id = ObjectId::new();

        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_delete_notification()
            .with(predicate::always(), predicate::eq(id))
            .return_once(|_, _| Ok(()));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::DELETE,
                &format!("/api/v1/notifications/{}", id.to_hex()),
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn get_unread_count() {
        let mut mocks = Mocks::new();
        mocks
            .notifications_service
            .expect_get_unread_count()
            .return_once(|_| Ok(output::UnreadCount { count: 7 }));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/notifications/unread-count",
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({ "count": 7 }));
    }

    #[tokio::test]
    async fn update_preferences_empty() {
        let mut mocks = Mocks::new();
        mocks
            .preferences_service
            .expect_update_preferences()
            .return_once(|_, _| Err(Error::Validation("no preferences to update")));
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::PATCH,
                "/api/v1/notifications/preferences",
                "",
                Some(json!({})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn send_broadcast_missing_admin_role() {
        let mut mocks = Mocks::new();
        mocks.broadcast_service.expect_send_broadcast().never();
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/admin/notifications/broadcast",
                Role::ProduceNotifications.as_ref(),
                Some(json!({ "title": "Crag closure", "message": "Closed" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn send_broadcast_result() {
        let mut mocks = Mocks::new();
        mocks
            .broadcast_service
            .expect_send_broadcast()
            .withf(|actor_id, broadcast| {
                *actor_id == Uuid::parse_str(USER_ID).unwrap()
                    && broadcast.target_role == Some(input::TargetRole::Moderator)
            })
            .return_once(|_, _| {
                Ok(output::BroadcastResult {
                    total_users: 3,
                    success_count: 2,
                    failed_count: 1,
                })
            });
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::POST,
                "/api/v1/admin/notifications/broadcast",
                Role::Admin.as_ref(),
                Some(json!({
                    "title": "Crag closure",
                    "message": "Closed",
                    "target_role": "moderator"
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!({ "totalUsers": 3, "successCount": 2, "failedCount": 1 })
        );
    }

    #[tokio::test]
    async fn get_admin_stats_missing_admin_role() {
        let mut mocks = Mocks::new();
        mocks.stats_service.expect_get_admin_stats().never();
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/admin/notifications/stats",
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn database_error_internal_server_error() {
        let mut mocks = Mocks::new();
        mocks.stats_service.expect_get_stats().return_once(|_| {
            Err(Error::Database(crate::repository::Error::NoDocumentUpdated))
        });
        let router = mocks.into_router();

        let response = router
            .oneshot(request(
                Method::GET,
                "/api/v1/notifications/stats",
                "",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
