//!
//! All roles used within application
//!

use strum::AsRefStr;

#[derive(Debug, Clone, Copy, AsRefStr)]
pub enum Role {
    #[strum(serialize = "belay_notifier_produce_notifications")]
    ProduceNotifications,
    #[strum(serialize = "belay_notifier_admin")]
    Admin,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn produce_notifications() {
        let role = Role::ProduceNotifications.as_ref();
        assert_eq!(role, "belay_notifier_produce_notifications");
    }

    #[test]
    fn admin() {
        let role = Role::Admin.as_ref();
        assert_eq!(role, "belay_notifier_admin");
    }
}
