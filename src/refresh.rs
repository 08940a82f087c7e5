//! Background refresh of the current hiring thread.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{error, info};

use crate::feed::JobFeed;

/// Periodically re-resolves the hiring thread and publishes the fresh
/// snapshot. After startup this is the only writer of the shared thread
/// state on a schedule; readers only trigger the same publish path when they
/// find the snapshot missing or stale.
pub struct RefreshLoop {
    feed: Arc<JobFeed>,
    period: Duration,
}

impl RefreshLoop {
    pub fn new(feed: Arc<JobFeed>, period: Duration) -> Self {
        Self {
            feed,
            // interval() panics on a zero period
            period: period.max(Duration::from_secs(1)),
        }
    }

    /// Run forever. Resolution failures are logged and the previous snapshot
    /// stays published; the next tick retries naturally.
    pub async fn run(self) {
        info!(period_secs = self.period.as_secs(), "Refresh loop started");

        let mut timer = interval(self.period);
        timer.tick().await; // the first tick completes immediately

        loop {
            timer.tick().await;
            match self.feed.refresh_if_stale().await {
                Ok(true) => info!("Published refreshed hiring thread"),
                Ok(false) => {}
                Err(e) => error!("Background refresh failed: {}", e),
            }
        }
    }
}
