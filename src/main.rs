use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adconsole::config::Config;
use adconsole::middleware::{ErrorHandler, MySqlSessionStore, RequestId, SessionAuth, SessionStore};
use adconsole::modules::reports;
use adconsole::modules::reports::repositories::{MySqlReportRepository, RevenueReportRepository};
use adconsole::modules::reports::services::ReportService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adconsole=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting advertising console reporting service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let session_store: Arc<dyn SessionStore> =
        Arc::new(MySqlSessionStore::new(db_pool.clone()));
    let repository: Arc<dyn RevenueReportRepository> =
        Arc::new(MySqlReportRepository::new(db_pool.clone()));
    let max_export_rows = config.reports.max_export_rows;
    let allowed_origin = config.app.cors_allowed_origin.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(SessionAuth::new(session_store.clone()))
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(cors)
            .app_data(web::Data::new(ReportService::new(
                repository.clone(),
                max_export_rows,
            )))
            .route("/health", web::get().to(health_check))
            .configure(reports::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "adconsole"
    }))
}
