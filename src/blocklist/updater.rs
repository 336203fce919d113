use super::provider::ListProvider;
use super::store::{BlocklistSet, BlocklistStore};
use crate::error::RefreshError;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Builds fresh blocklists from a [`ListProvider`] and installs them.
#[derive(Clone)]
pub struct Updater {
    provider: Arc<dyn ListProvider>,
}

impl Updater {
    pub fn new(provider: impl ListProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub fn from_boxed(provider: Box<dyn ListProvider>) -> Self {
        Self {
            provider: Arc::from(provider),
        }
    }

    pub fn source(&self) -> String {
        self.provider.source()
    }

    /// Fetches the list, builds a new set and swaps it into `store`.
    ///
    /// Cancellation is honoured until the fetch completes. On any error the
    /// store keeps its current set. Returns the number of domains installed.
    pub async fn refresh(
        &self,
        cancel: &CancellationToken,
        store: &BlocklistStore,
    ) -> Result<usize, RefreshError> {
        let span = info_span!("blocklist_refresh", run_id = %Uuid::new_v4(), source = %self.provider.source());
        self.run(cancel, store).instrument(span).await
    }

    async fn run(
        &self,
        cancel: &CancellationToken,
        store: &BlocklistStore,
    ) -> Result<usize, RefreshError> {
        let started = Instant::now();

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("refresh canceled before fetch completed");
                return Err(RefreshError::Canceled);
            }
            body = self.provider.fetch() => body.inspect_err(|e| warn!(error = %e, "fetch failed"))?,
        };

        let set = BlocklistSet::from_reader(body.as_slice())
            .inspect_err(|e| warn!(error = %e, "could not read fetched list"))?;
        let count = set.len();
        let previous = store.len();

        store.swap(set);

        info!(
            domains = count,
            previous,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "blocklist refreshed"
        );
        Ok(count)
    }
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("source", &self.provider.source())
            .finish()
    }
}
