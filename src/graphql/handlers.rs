use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Handles incoming GraphQL requests.
///
/// Runs the query against the shared schema. The schema carries the
/// [`EmailParser`](crate::validation::parser::EmailParser), so `parseEmail`
/// sees whichever blocklist is active when the query resolves.
///
/// # Arguments
/// - `schema`: the application's GraphQL schema, registered as app data.
/// - `req`: the incoming request with query, variables and operation name.
///
/// # Returns
/// A [`GraphQLResponse`]. Query errors are reported in its body with a 200.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground for interactive queries.
///
/// The page sends its requests to `/api/v1/graphql`.
///
/// # Note
/// Meant for development. Leave the route out of production deployments
/// that should not expose an interactive console.
///
/// # Returns
/// An [`HttpResponse`] with the Playground HTML.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(
            "/api/v1/graphql",
        )))
}
