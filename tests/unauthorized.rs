//!
//! Module testing if all paths are protected by identity middleware.
//!
//! Any request without identity headers should return 401
//!
mod common;
use common::*;

use bson::oid::ObjectId;
use reqwest::{Client, Method, StatusCode};

async fn assert_unauthorized(method: Method, path: &str) {
    init_env();

    let response = Client::new()
        .request(method, format!("http://{}{}", address(), path))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn post_notifications() {
    assert_unauthorized(Method::POST, "/api/v1/notifications").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn post_notifications_likes() {
    assert_unauthorized(Method::POST, "/api/v1/notifications/likes").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn get_notifications() {
    assert_unauthorized(Method::GET, "/api/v1/notifications").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn delete_notifications() {
    assert_unauthorized(Method::DELETE, "/api/v1/notifications").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn get_notifications_unread_count() {
    assert_unauthorized(Method::GET, "/api/v1/notifications/unread-count").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn put_notifications_read() {
    assert_unauthorized(Method::PUT, "/api/v1/notifications/read").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn put_notification_read() {
    let path = format!("/api/v1/notifications/{}/read", ObjectId::new().to_hex());
    assert_unauthorized(Method::PUT, &path).await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn delete_notification() {
    let path = format!("/api/v1/notifications/{}", ObjectId::new().to_hex());
    assert_unauthorized(Method::DELETE, &path).await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn get_notifications_stats() {
    assert_unauthorized(Method::GET, "/api/v1/notifications/stats").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn get_notifications_preferences() {
    assert_unauthorized(Method::GET, "/api/v1/notifications/preferences").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn patch_notifications_preferences() {
    assert_unauthorized(Method::PATCH, "/api/v1/notifications/preferences").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn post_admin_broadcast() {
    assert_unauthorized(Method::POST, "/api/v1/admin/notifications/broadcast").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn get_admin_broadcasts() {
    assert_unauthorized(Method::GET, "/api/v1/admin/notifications/broadcasts").await;
}

#[tokio::test]
#[ignore = "requires running server"]
async fn get_admin_stats() {
    assert_unauthorized(Method::GET, "/api/v1/admin/notifications/stats").await;
}
