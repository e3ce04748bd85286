use crate::handlers::invoice::{create, delete as delete_handler, list, read, update};
use crate::handlers::not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/invoices` (with or without trailing slash) and `/invoices/:id`.
pub fn invoice_routes(state: AppState) -> Router {
    let collection = get(list).post(create).fallback(not_found);
    Router::new()
        .route("/invoices", collection.clone())
        .route("/invoices/", collection)
        .route(
            "/invoices/:id",
            get(read).patch(update).delete(delete_handler).fallback(not_found),
        )
        .with_state(state)
}
