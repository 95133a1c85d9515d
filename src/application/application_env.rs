use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    pub dedup_window: Duration,
    pub aggregation_window: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("BELAY_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("BELAY_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("BELAY_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("BELAY_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("BELAY_NOTIFIER_DB_NAME")?;
        let max_http_content_len = Self::env_var("BELAY_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let dedup_minutes = Self::env_var("BELAY_NOTIFIER_DEDUP_MINUTES")?.parse::<u64>()?;
        let dedup_window = Duration::from_secs(dedup_minutes * 60);
        let aggregation_window_minutes =
            Self::env_var("BELAY_NOTIFIER_AGGREGATION_WINDOW_MINUTES")?.parse::<u64>()?;
        let aggregation_window = Duration::from_secs(aggregation_window_minutes * 60);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            dedup_window,
            aggregation_window,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
