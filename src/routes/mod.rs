use actix_web::web;

/// `GET /health`: service status and blocklist size.
pub mod health;

/// `POST /parse-email` and `POST /parse-emails`.
pub mod email;

/// `POST /blocklist/refresh`: on-demand blocklist refresh.
pub mod blocklist;

/// GraphQL endpoint and playground.
pub mod graphql;

/// # API Route Configuration
///
/// Mounts every endpoint under `/api/v1`.
///
/// ```text
/// GET  /api/v1/health
/// POST /api/v1/parse-email
/// POST /api/v1/parse-emails
/// POST /api/v1/blocklist/refresh
/// POST /api/v1/graphql
/// GET  /api/v1/playground
/// ```
///
/// Handlers expect `web::Data<EmailParser>`, `web::Data<Updater>` and
/// `web::Data<AppSchema>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(blocklist::configure_routes)
            .configure(graphql::configure_routes),
    );
}
