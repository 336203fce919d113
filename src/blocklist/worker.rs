use super::store::BlocklistStore;
use super::updater::Updater;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Refreshes the blocklist on a fixed interval until canceled.
pub struct RefreshWorker {
    updater: Updater,
    store: Arc<BlocklistStore>,
    period: Duration,
    cancel: CancellationToken,
}

impl RefreshWorker {
    pub fn new(
        updater: Updater,
        store: Arc<BlocklistStore>,
        period: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            updater,
            store,
            period,
            cancel,
        }
    }

    /// Runs the loop. The first refresh happens immediately.
    ///
    /// A failed refresh is logged and left for the next tick; the active
    /// set stays as it was.
    pub async fn start(&self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            source = %self.updater.source(),
            period_secs = self.period.as_secs(),
            "blocklist refresh worker started"
        );

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            match self.updater.refresh(&self.cancel, &self.store).await {
                Ok(_) => {}
                Err(e) if e.is_canceled() => break,
                Err(e) => warn!(error = %e, "scheduled blocklist refresh failed, keeping current list"),
            }
        }

        info!("blocklist refresh worker stopped");
    }
}
