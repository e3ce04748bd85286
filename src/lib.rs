//! BizTime: REST API over companies, invoices and industries stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod slug;
pub mod state;
pub mod store;

pub use config::{AppConfig, Environment};
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_schema};
