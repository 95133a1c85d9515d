#![allow(dead_code)]

use reqwest::RequestBuilder;
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub const PRODUCE_NOTIFICATIONS_ROLE: &str = "belay_notifier_produce_notifications";
pub const ADMIN_ROLE: &str = "belay_notifier_admin";

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("BELAY_NOTIFIER_BIND_ADDRESS").unwrap()
}

///
/// Identity headers normally set by the API gateway
///
pub trait WithIdentity {
    fn identity(self, user_id: Uuid, roles: &[&str]) -> Self;
}

impl WithIdentity for RequestBuilder {
    fn identity(self, user_id: Uuid, roles: &[&str]) -> Self {
        self.header("X-User-Id", user_id.to_string())
            .header("X-User-Roles", roles.join(","))
    }
}
