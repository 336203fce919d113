use crate::models::health::HealthResponse;
use crate::validation::parser::EmailParser;
use async_graphql::{Context, Object, Result, SimpleObject};

/// GraphQL view of [`HealthResponse`].
#[derive(Debug, SimpleObject)]
pub struct Health {
    /// "UP" while the service is running.
    pub status: String,
    /// RFC 3339 time of the check.
    pub timestamp: String,
    /// Domains in the active blocklist.
    pub blocklist_domains: u64,
    /// RFC 3339 time of the last refresh, null while the bundled list is active.
    pub last_refreshed: Option<String>,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            blocklist_domains: response.blocklist_domains as u64,
            last_refreshed: response.last_refreshed,
        }
    }
}

#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Service status and blocklist state.
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let parser = ctx.data::<EmailParser>()?;
        Ok(Health::from(HealthResponse::up(parser.store())))
    }
}

#[cfg(test)]
mod tests {
    use crate::blocklist::{BlocklistSet, BlocklistStore};
    use crate::graphql::schema::create_schema;
    use crate::validation::parser::EmailParser;
    use chrono::DateTime;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_query_resolver() {
        let store = BlocklistStore::new(BlocklistSet::from_domains(["a.com", "b.com"]));
        let schema = create_schema(EmailParser::with_store(Arc::new(store)));

        let result = schema
            .execute("{ health { status timestamp blocklistDomains lastRefreshed } }")
            .await;
        assert!(result.errors.is_empty(), "{:?}", result.errors);

        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        assert_eq!(data["health"]["blocklistDomains"], 2);
        assert!(data["health"]["lastRefreshed"].is_null());

        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
