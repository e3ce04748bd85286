use crate::handlers::company::{create, delete as delete_handler, list, read, update};
use crate::handlers::not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/companies` (with or without trailing slash) and `/companies/:code`.
pub fn company_routes(state: AppState) -> Router {
    let collection = get(list).post(create).fallback(not_found);
    Router::new()
        .route("/companies", collection.clone())
        .route("/companies/", collection)
        .route(
            "/companies/:code",
            get(read).patch(update).delete(delete_handler).fallback(not_found),
        )
        .with_state(state)
}
