use actix_web::{App, HttpServer, web::Data};
use disposable_email::blocklist::{BlocklistStore, RefreshWorker, Updater, provider::provider_for_source};
use disposable_email::config::Settings;
use disposable_email::graphql::schema::create_schema;
use disposable_email::openapi::ApiDoc;
use disposable_email::telemetry;
use disposable_email::validation::parser::EmailParser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Disposable Email Service Entry Point
///
/// - REST endpoints under `/api/v1` (see `routes::configure`)
/// - GraphQL at `/api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI at `/swagger-ui/`
///
/// Starts with the bundled blocklist and, unless disabled, refreshes it
/// in the background from `BLOCKLIST_SOURCE`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = Settings::from_env().map_err(std::io::Error::other)?;
    telemetry::init_tracing(&settings.log_filter);
    tracing::info!(?settings, "starting disposable email service");

    let store = Arc::new(BlocklistStore::bundled());
    let parser = EmailParser::with_store(Arc::clone(&store));
    let provider = provider_for_source(&settings.blocklist_source, settings.fetch_timeout)
        .map_err(std::io::Error::other)?;
    let updater = Updater::from_boxed(provider);

    let shutdown = CancellationToken::new();
    let worker = settings.refresh_interval.map(|period| {
        let worker = RefreshWorker::new(updater.clone(), Arc::clone(&store), period, shutdown.clone());
        tokio::spawn(async move { worker.start().await })
    });
    if worker.is_none() {
        tracing::info!("scheduled blocklist refresh disabled");
    }

    let schema = create_schema(parser.clone());
    let server_parser = parser;
    let server_updater = updater.clone();

    let result = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(server_parser.clone()))
            .app_data(Data::new(server_updater.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(disposable_email::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await;

    shutdown.cancel();
    if let Some(handle) = worker {
        let _ = handle.await;
    }

    result
}
