use crate::handlers::industry::{associate, create, delete as delete_handler, list};
use crate::handlers::not_found;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// `/industries` (with or without trailing slash), `/industries/:code` and
/// `/industries/:code/companies`.
pub fn industry_routes(state: AppState) -> Router {
    let collection = get(list).post(create).fallback(not_found);
    Router::new()
        .route("/industries", collection.clone())
        .route("/industries/", collection)
        .route("/industries/:code", delete(delete_handler).fallback(not_found))
        .route(
            "/industries/:code/companies",
            post(associate).fallback(not_found),
        )
        .with_state(state)
}
