use crate::blocklist::BlocklistStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Number of domains in the active blocklist.
    pub blocklist_domains: usize,
    /// RFC 3339 time of the last successful refresh, `null` if the
    /// bundled list is still in use.
    pub last_refreshed: Option<String>,
}

impl HealthResponse {
    pub fn up(store: &BlocklistStore) -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            blocklist_domains: store.len(),
            last_refreshed: store.last_refreshed().map(|t| t.to_rfc3339()),
        }
    }
}
