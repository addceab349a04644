use std::sync::Arc;

use axum::Router;
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer};

pub mod models;
pub mod routes;
pub mod services;

use services::stripe::TransactionService;

pub const DEFAULT_ROUTE_PREFIX: &str = "api/stripe";

/// Assemble the application router. The transaction endpoint is mounted under
/// `route_prefix` (an empty prefix mounts it at the root); the health check
/// always lives at `/health`.
pub fn app_router(route_prefix: &str, service: Arc<dyn TransactionService>) -> Router {
    let stripe_routes =
        routes::stripe::stripe_routes(service).route_layer(CompressionLayer::new().gzip(true));

    let head_route = Router::new().merge(routes::health::health_routes());

    let router = match route_prefix.trim_matches('/') {
        "" => head_route.merge(stripe_routes),
        prefix => head_route.nest(&format!("/{prefix}"), stripe_routes),
    };

    router.route_layer(RequestBodyLimitLayer::new(1024 * 64)) //64KB limit
}
