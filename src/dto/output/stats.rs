use crate::{dto::NotificationType, repository};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStats {
    pub overview: StatsOverview,
    pub by_type: Vec<TypeCount>,
    pub daily_trend: Vec<TrendPoint>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
    ///
    /// Percentage of read notifications rounded to the nearest integer
    ///
    pub read_rate: u64,
}

impl From<repository::BasicStats> for StatsOverview {
    fn from(value: repository::BasicStats) -> Self {
        let read_rate = match value.total {
            0 => 0,
            total => (value.read as f64 / total as f64 * 100.0).round() as u64,
        };

        Self {
            total: value.total,
            unread: value.unread,
            read: value.read,
            read_rate,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub count: u64,
}

impl From<repository::TypeCount> for TypeCount {
    fn from(value: repository::TypeCount) -> Self {
        Self {
            notification_type: value.notification_type,
            count: value.count,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub bucket: String,
    pub count: u64,
}

impl From<repository::BucketCount> for TrendPoint {
    fn from(value: repository::BucketCount) -> Self {
        Self {
            bucket: value.bucket,
            count: value.count,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub period: &'static str,
    pub overview: AdminStatsOverview,
    pub by_type: Vec<TypeCount>,
    pub hourly_trend: Vec<TrendPoint>,
    pub top_recipients: Vec<TopRecipient>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsOverview {
    pub total: u64,
    pub unread: u64,
    pub users_with_notifications: u64,
}

impl From<repository::SystemStats> for AdminStatsOverview {
    fn from(value: repository::SystemStats) -> Self {
        Self {
            total: value.total,
            unread: value.unread,
            users_with_notifications: value.users_with_notifications,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRecipient {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub notification_count: u64,
}

impl From<repository::TopRecipient> for TopRecipient {
    fn from(value: repository::TopRecipient) -> Self {
        Self {
            user_id: value.user_id,
            username: value.username,
            display_name: value.display_name,
            notification_count: value.notification_count,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_rate_zero_total() {
        let overview = StatsOverview::from(repository::BasicStats::default());

        assert_eq!(overview.read_rate, 0);
    }

    #[test]
    fn read_rate_rounded() {
        let overview = StatsOverview::from(repository::BasicStats {
            total: 3,
            unread: 1,
            read: 2,
        });

        assert_eq!(overview.read_rate, 67);
    }

    #[test]
    fn stats_json_camel_case() {
        let stats = NotificationStats {
            overview: StatsOverview::from(repository::BasicStats {
                total: 4,
                unread: 3,
                read: 1,
            }),
            by_type: vec![],
            daily_trend: vec![],
        };

        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["overview"]["readRate"], 25);
        assert!(json.get("byType").is_some());
        assert!(json.get("dailyTrend").is_some());
    }
}
