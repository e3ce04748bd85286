//! Response envelope helpers. Every success body is a single-key object, e.g. `{"company": {...}}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::collections::HashMap;

pub type Keyed<T> = HashMap<&'static str, T>;

fn keyed<T: Serialize>(key: &'static str, data: T) -> Json<Keyed<T>> {
    Json(HashMap::from([(key, data)]))
}

pub fn success_ok<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Keyed<T>>) {
    (StatusCode::OK, keyed(key, data))
}

pub fn success_created<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Keyed<T>>) {
    (StatusCode::CREATED, keyed(key, data))
}

/// `{"status": "Deleted"}`
pub fn deleted() -> (StatusCode, Json<Keyed<&'static str>>) {
    success_ok("status", "Deleted")
}
