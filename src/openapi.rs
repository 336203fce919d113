use utoipa::OpenApi;

/// OpenAPI document for the REST surface, served through Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::parse_email,
        crate::routes::email::parse_emails,
        crate::routes::blocklist::refresh_blocklist,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::BulkEmailRequest,
            crate::models::email::BulkParseResult,
            crate::models::email::BulkParseResponse,
            crate::models::email::ErrorBody,
            crate::models::email::RefreshResponse,
            crate::validation::parser::ParsedEmail,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Parsing", description = "Address normalization and disposable domain detection"),
        (name = "Blocklist", description = "Disposable domain list maintenance"),
        (name = "GraphQL", description = "GraphQL API exposing the same operations")
    ),
    info(
        description = "Email address parsing, normalization and disposable domain detection",
        title = "Disposable Email API",
        version = "0.3.0",
    )
)]
pub struct ApiDoc;
