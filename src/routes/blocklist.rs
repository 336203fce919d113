use crate::blocklist::Updater;
use crate::error::RefreshError;
use crate::models::email::{ErrorBody, RefreshResponse};
use crate::validation::parser::EmailParser;
use actix_web::{HttpResponse, Responder, post, web};
use tokio_util::sync::CancellationToken;

/// # Blocklist Refresh Endpoint
///
/// Fetches the configured list now and installs it. The previous list
/// stays active if anything goes wrong. Dropping the request before the
/// download completes aborts the refresh without touching the list.
///
/// # Arguments
/// - `updater`: configured list source.
/// - `parser`: shared parser; the refresh swaps the set in its store.
///
/// ## Responses
/// - **200 OK**: number of domains now active and the refresh time
/// - **422 Unprocessable Entity**: fetched content was unreadable or held
///   no valid domain (`PARSE_FAILED`)
/// - **502 Bad Gateway**: list source unreachable (`FETCH_FAILED`)
/// - **503 Service Unavailable**: the refresh was canceled (`CANCELED`)
///
/// # Note
/// Requests in flight keep parsing against the old set until the swap.
#[utoipa::path(
    post,
    path = "/api/v1/blocklist/refresh",
    responses(
        (status = 200, description = "Blocklist refreshed", body = RefreshResponse),
        (status = 422, description = "Fetched list could not be read", body = ErrorBody),
        (status = 502, description = "List source unreachable", body = ErrorBody),
        (status = 503, description = "Refresh canceled", body = ErrorBody)
    ),
    tag = "Blocklist"
)]
#[post("/blocklist/refresh")]
pub async fn refresh_blocklist(
    updater: web::Data<Updater>,
    parser: web::Data<EmailParser>,
) -> impl Responder {
    let store = parser.store();
    match updater.refresh(&CancellationToken::new(), store).await {
        Ok(domains) => HttpResponse::Ok().json(RefreshResponse {
            domains,
            refreshed_at: store.last_refreshed().map(|t| t.to_rfc3339()),
        }),
        Err(e @ RefreshError::Fetch(_)) => {
            HttpResponse::BadGateway().json(ErrorBody::new("FETCH_FAILED", e.to_string()))
        }
        Err(e @ RefreshError::Parse(_)) => {
            HttpResponse::UnprocessableEntity().json(ErrorBody::new("PARSE_FAILED", e.to_string()))
        }
        Err(e @ RefreshError::Canceled) => {
            HttpResponse::ServiceUnavailable().json(ErrorBody::new("CANCELED", e.to_string()))
        }
    }
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `POST /blocklist/refresh`: on-demand refresh
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(refresh_blocklist);
}
