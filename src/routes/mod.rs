//! Routers per resource plus the assembled application.

pub mod common;
pub mod company;
pub mod industry;
pub mod invoice;

pub use common::common_routes;
pub use company::company_routes;
pub use industry::industry_routes;
pub use invoice::invoice_routes;

use crate::handlers::not_found;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The full API: resource routers and common routes merged, JSON 404 for unknown
/// paths and for methods a known path does not serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(company_routes(state.clone()))
        .merge(invoice_routes(state.clone()))
        .merge(industry_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}
