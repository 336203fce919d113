use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::validation::parser::EmailParser;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query combining health and email parsing operations.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema. Resolvers read the parser (and through it the
/// blocklist) from schema data.
///
/// ```rust,no_run
/// use disposable_email::blocklist::BlocklistStore;
/// use disposable_email::graphql::schema::create_schema;
/// use disposable_email::validation::parser::EmailParser;
/// use std::sync::Arc;
///
/// let schema = create_schema(EmailParser::with_store(Arc::new(BlocklistStore::bundled())));
/// ```
pub fn create_schema(parser: EmailParser) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(parser)
        .finish()
}
