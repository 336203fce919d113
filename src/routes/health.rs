use crate::models::HealthResponse;
use crate::validation::parser::EmailParser;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the service status, a timestamp, and the size and age of the
/// active blocklist.
///
/// # Arguments
/// - `parser`: shared parser; its store supplies the blocklist figures.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: `status` ("UP"), `timestamp` in RFC 3339, `blocklist_domains`,
///     and `last_refreshed` (`null` until the first successful refresh)
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "blocklist_domains": 3512,
///   "last_refreshed": null
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(parser: web::Data<EmailParser>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up(parser.store()))
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
