//! Connection pool and database bootstrap for the `companies`, `invoices`,
//! `industries` and `company_industries` tables.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Table DDL in dependency order. Idempotent; existing tables are left untouched.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id SERIAL PRIMARY KEY,
        comp_code TEXT NOT NULL REFERENCES companies (code) ON DELETE CASCADE,
        amt DOUBLE PRECISION NOT NULL CHECK (amt > 0 AND amt < 'Infinity'),
        paid BOOLEAN NOT NULL DEFAULT FALSE,
        add_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        paid_date TIMESTAMPTZ
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS industries (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS company_industries (
        comp_code TEXT NOT NULL REFERENCES companies (code) ON DELETE CASCADE,
        ind_code TEXT NOT NULL REFERENCES industries (code) ON DELETE CASCADE,
        PRIMARY KEY (comp_code, ind_code)
    )
    "#,
];

/// Create the process-wide pool for the configured database.
pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    tracing::info!(
        max_connections = config.max_connections,
        environment = ?config.environment,
        "connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create the four tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(tables = SCHEMA.len(), "schema ensured");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Internal(format!("invalid database url: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a URL into (maintenance-db URL, database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(authority_start..)
        .and_then(|rest| rest.find('/'))
        .map(|i| authority_start + i + 1)
        .ok_or_else(|| AppError::Internal("database url has no database name".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
