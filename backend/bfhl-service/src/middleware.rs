//! HTTP middleware for bfhl-service.
//!
//! `RequestMetrics` takes the caller's `x-correlation-id` (or generates a
//! UUID v4), stores it in request extensions, echoes it on the response, logs
//! the request outcome and feeds the Prometheus request metrics. A panic
//! inside the wrapped service is answered with the internal-error envelope
//! instead of tearing down the connection.

use actix_cors::Cors;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage, HttpRequest, ResponseError,
};
use bfhl_core::{AllowedOrigins, BfhlError};
use futures::future::{FutureExt, LocalBoxFuture};
use std::future::{ready, Ready};
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use uuid::Uuid;

use crate::metrics;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Correlation id assigned to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

/// Correlation id stored by [`RequestMetrics`], if the request passed through it.
pub fn get_correlation_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<CorrelationId>().map(|id| id.0.clone())
}

#[derive(Clone, Default)]
pub struct RequestMetrics;

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsService { service }))
    }
}

pub struct RequestMetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        // Route pattern rather than raw path keeps label cardinality bounded.
        let path = req
            .match_pattern()
            .unwrap_or_else(|| "unmatched".to_string());

        let correlation_id = req
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        req.extensions_mut()
            .insert(CorrelationId(correlation_id.clone()));

        let http_req = req.request().clone();
        let fut = AssertUnwindSafe(self.service.call(req)).catch_unwind();

        Box::pin(async move {
            let mut res = match fut.await {
                Ok(res) => res?.map_into_left_body(),
                Err(payload) => {
                    let err = BfhlError::from_panic(payload);
                    metrics::record_rejection(&err);
                    ServiceResponse::new(http_req, err.error_response()).map_into_right_body()
                }
            };
            let elapsed = start.elapsed();
            let status = res.status().as_u16();

            if let Ok(value) = HeaderValue::from_str(&correlation_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
            }

            metrics::observe_http_request(&method, &path, status, elapsed);
            tracing::info!(
                method = %method,
                path = %path,
                status = status,
                correlation_id = %correlation_id,
                duration_ms = elapsed.as_millis() as u64,
                "HTTP request completed"
            );

            Ok(res)
        })
    }
}

/// CORS policy for the configured origins.
pub fn build_cors(allowed_origins: &AllowedOrigins) -> Cors {
    let cors = match allowed_origins {
        AllowedOrigins::Any => Cors::default().allow_any_origin(),
        AllowedOrigins::List(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };
    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
