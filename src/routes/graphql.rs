use crate::graphql::handlers;
use actix_web::web;

/// # GraphQL Route Configuration
///
/// ## Currently Configured Routes
///
/// - `POST /graphql`: query endpoint, see [`handlers::graphql_handler`]
/// - `GET /playground`: interactive console, see [`handlers::graphql_playground`]
///
/// # Note
/// The handler expects `web::Data<AppSchema>` on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graphql").route(web::post().to(handlers::graphql_handler)))
        .service(web::resource("/playground").route(web::get().to(handlers::graphql_playground)));
}
