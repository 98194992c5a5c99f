use sqldns_application::use_cases::RefreshZonesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const MIN_INTERVAL_SECS: u64 = 1;

/// Background job that reloads the served zone list.
///
/// The first tick fires immediately so the cache is populated at startup;
/// a failed refresh is logged and the previous list stays in place until
/// the next tick.
pub struct ZoneRefreshJob {
    refresh: Arc<RefreshZonesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ZoneRefreshJob {
    pub fn new(refresh: Arc<RefreshZonesUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: 600,
            shutdown: CancellationToken::new(),
        }
    }

    /// Refresh period in seconds; values below 1 are raised to 1.
    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(MIN_INTERVAL_SECS);
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            "Starting zone refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ZoneRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.refresh.execute().await {
                            Ok(zones) => info!(zones, "ZoneRefreshJob: zone list reloaded"),
                            Err(e) => error!(error = %e, "ZoneRefreshJob: refresh failed"),
                        }
                    }
                }
            }
        })
    }
}
