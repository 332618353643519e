pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use actix_web::web;
use bfhl_core::IdentityConfig;

pub use config::Config;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub identity: IdentityConfig,
}

impl AppState {
    pub fn new(identity: IdentityConfig) -> Self {
        Self { identity }
    }
}

/// Register the service routes.
///
/// Callers supply `web::Data<AppState>` and, optionally, a
/// `web::PayloadConfig` bounding the POST body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/metrics", web::get().to(metrics::serve_metrics))
        .service(
            web::resource("/api/bfhl")
                .route(web::post().to(handlers::process_data))
                .route(web::get().to(handlers::operation_code)),
        );
}
