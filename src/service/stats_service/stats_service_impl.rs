use super::StatsService;
use crate::{dto::output, error::Error, repository::NotificationsRepository};
use axum::async_trait;
use std::{sync::Arc, time::Duration};
use time::{OffsetDateTime, Time};
use uuid::Uuid;

const DAILY_TREND_DAYS: u64 = 7;
const ADMIN_PERIOD: &str = "24h";
const ADMIN_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);
const TOP_RECIPIENTS_LIMIT: i64 = 10;

pub struct StatsServiceImpl {
    repository: Arc<dyn NotificationsRepository>,
}

impl StatsServiceImpl {
    pub fn new(repository: Arc<dyn NotificationsRepository>) -> Self {
        Self { repository }
    }

    fn daily_trend_since(now: OffsetDateTime) -> OffsetDateTime {
        (now - Duration::from_secs(DAILY_TREND_DAYS * 24 * 60 * 60)).replace_time(Time::MIDNIGHT)
    }
}

#[async_trait]
impl StatsService for StatsServiceImpl {
    async fn get_stats(&self, user_id: Uuid) -> Result<output::NotificationStats, Error> {
        tracing::info!("computing notification stats");

        let since = Self::daily_trend_since(OffsetDateTime::now_utc());
        let (basic_stats, type_stats, daily_trend) = tokio::try_join!(
            self.repository.basic_stats(user_id),
            self.repository.type_stats(user_id),
            self.repository.daily_trend(user_id, since),
        )?;

        Ok(output::NotificationStats {
            overview: basic_stats.into(),
            by_type: type_stats.into_iter().map(output::TypeCount::from).collect(),
            daily_trend: daily_trend
                .into_iter()
                .map(output::TrendPoint::from)
                .collect(),
        })
    }

    async fn get_admin_stats(&self) -> Result<output::AdminStats, Error> {
        tracing::info!("computing admin stats");

        let since = OffsetDateTime::now_utc() - ADMIN_WINDOW;
        let (system_stats, type_stats, hourly_trend, top_recipients) = tokio::try_join!(
            self.repository.system_stats(since),
            self.repository.type_stats_since(since),
            self.repository.hourly_trend(since),
            self.repository.top_recipients(since, TOP_RECIPIENTS_LIMIT),
        )?;

        Ok(output::AdminStats {
            period: ADMIN_PERIOD,
            overview: system_stats.into(),
            by_type: type_stats.into_iter().map(output::TypeCount::from).collect(),
            hourly_trend: hourly_trend
                .into_iter()
                .map(output::TrendPoint::from)
                .collect(),
            top_recipients: top_recipients
                .into_iter()
                .map(output::TopRecipient::from)
                .collect(),
        })
    }
}
