use crate::models::email::{BulkEmailRequest, BulkParseResponse, BulkParseResult, EmailRequest, ErrorBody};
use crate::validation::parser::{EmailParser, ParsedEmail};
use actix_web::{HttpResponse, Responder, post, web};

/// # Parse Email Endpoint
///
/// Parses a single address: trims it, checks its basic structure,
/// normalizes the local part for its provider and flags disposable domains.
///
/// # Arguments
/// - `req`: JSON body with `email` and an optional `case_sensitive` flag
///   (defaults to `false`).
/// - `parser`: shared parser holding the normalization rules and blocklist.
///
/// ## Responses
/// - **200 OK**: the parsed address
/// - **400 Bad Request**: `{"error": "INVALID_EMAIL", "message": ...}`
///
/// ## Example Request
/// ```json
/// { "email": "John.Smith+news@gmail.com", "case_sensitive": false }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/parse-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Parsed email", body = ParsedEmail),
        (status = 400, description = "Invalid email", body = ErrorBody)
    ),
    tag = "Email Parsing"
)]
#[post("/parse-email")]
pub async fn parse_email(
    req: web::Json<EmailRequest>,
    parser: web::Data<EmailParser>,
) -> impl Responder {
    match parser.parse(&req.email, req.case_sensitive) {
        Ok(parsed) => HttpResponse::Ok().json(parsed),
        Err(e) => HttpResponse::BadRequest().json(ErrorBody::from(&e)),
    }
}

/// # Bulk Parse Endpoint
///
/// Parses every address in the batch. Invalid addresses do not fail the
/// request; they are reported per entry.
///
/// # Arguments
/// - `req`: JSON body with `emails` and one `case_sensitive` flag for all.
/// - `parser`: shared parser.
///
/// # Returns
/// **200 OK** with one result per input, in input order, plus valid,
/// invalid and disposable counts.
///
/// # Note
/// A refresh that lands mid-batch is visible to the entries parsed after it.
#[utoipa::path(
    post,
    path = "/api/v1/parse-emails",
    request_body = BulkEmailRequest,
    responses(
        (status = 200, description = "Per-address results", body = BulkParseResponse)
    ),
    tag = "Email Parsing"
)]
#[post("/parse-emails")]
pub async fn parse_emails(
    req: web::Json<BulkEmailRequest>,
    parser: web::Data<EmailParser>,
) -> impl Responder {
    let BulkEmailRequest {
        emails,
        case_sensitive,
    } = req.into_inner();

    let results = emails
        .into_iter()
        .map(|email| match parser.parse(&email, case_sensitive) {
            Ok(parsed) => BulkParseResult {
                email,
                parsed: Some(parsed),
                error: None,
            },
            Err(e) => BulkParseResult {
                error: Some(ErrorBody::from(&e)),
                email,
                parsed: None,
            },
        })
        .collect();

    HttpResponse::Ok().json(BulkParseResponse::from_results(results))
}

/// # Route Configuration
///
/// ## Currently Configured Routes
///
/// - `POST /parse-email`: single address
/// - `POST /parse-emails`: batch
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(parse_email).service(parse_emails);
}
