pub mod api;
pub mod config;

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use bfhl_core::{AllowedOrigins, BfhlError, IdentityConfig};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyHeader, CorsLayer},
    trace::TraceLayer,
};

pub use crate::config::{Config, ServerConfig};

#[derive(Clone, Default)]
pub struct AppState {
    pub identity: Arc<IdentityConfig>,
}

impl AppState {
    pub fn new(identity: IdentityConfig) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}

/// Routes only, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api::routes())
}

/// Full application: routes, state and middleware stack.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    with_layers(routes().with_state(state), server)
}

/// Body limit, panic recovery, tracing and CORS.
pub fn with_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_allowed_origins))
}

fn cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let origin = match allowed_origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        // Entries were validated at load, so none are dropped here.
        AllowedOrigins::List(origins) => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AnyHeader)
}

async fn health_check() -> &'static str {
    "OK"
}

/// A panic while handling a request still answers with the fixed
/// internal-error envelope.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    BfhlError::from_panic(payload).into_response()
}
