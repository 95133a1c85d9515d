use std::time::Duration;

pub struct NotificationsServiceConfig {
    ///
    /// How long the same actor can't notify about the same target again
    ///
    pub dedup_window: Duration,

    ///
    /// How long likes of the same target are merged into one notification
    ///
    pub aggregation_window: Duration,
}
