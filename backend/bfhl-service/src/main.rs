use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bfhl_service::middleware::{build_cors, RequestMetrics};
use bfhl_service::{AppState, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting bfhl-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        user_id = %config.identity.user_id,
        max_body_bytes = config.http.max_body_bytes,
        "Configuration loaded"
    );

    let state = web::Data::new(AppState::new(config.identity.clone()));
    let max_body_bytes = config.http.max_body_bytes;
    let allowed_origins = config.cors.allowed_origins.clone();
    let bind_address = config.bind_address();

    tracing::info!("HTTP server listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .wrap(build_cors(&allowed_origins))
            .wrap(RequestMetrics)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(bfhl_service::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {bind_address}"))?
    .run()
    .await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,bfhl_service=debug,bfhl_core=debug,actix_web=info".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
