//! Invoice queries and the paid / paid_date transition.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
}

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// Next `paid_date` when an invoice moves from `current_paid` to `requested_paid`.
///
/// | current | requested | paid_date |
/// |---------|-----------|-----------|
/// | false   | true      | `now`     |
/// | true    | false     | cleared   |
/// | same    | same      | unchanged |
pub fn next_paid_date(
    current_paid: bool,
    current_paid_date: Option<DateTime<Utc>>,
    requested_paid: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (current_paid, requested_paid) {
        (false, true) => Some(now),
        (true, false) => None,
        _ => current_paid_date,
    }
}

pub struct InvoiceService;

impl InvoiceService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, AppError> {
        let sql = format!("SELECT {} FROM invoices", INVOICE_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Invoice>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn list_for_company(pool: &PgPool, comp_code: &str) -> Result<Vec<Invoice>, AppError> {
        let sql = format!(
            "SELECT {} FROM invoices WHERE comp_code = $1 ORDER BY id",
            INVOICE_COLUMNS
        );
        tracing::debug!(sql = %sql, comp_code = %comp_code, "query");
        let rows = sqlx::query_as::<_, Invoice>(&sql)
            .bind(comp_code)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, id: i32) -> Result<Option<Invoice>, AppError> {
        let sql = format!("SELECT {} FROM invoices WHERE id = $1", INVOICE_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert an unpaid invoice. `amt` is passed as text and cast by PostgreSQL, so a
    /// missing or non-numeric amount fails the same way an unknown `comp_code` does.
    pub async fn create(
        pool: &PgPool,
        comp_code: Option<&str>,
        amt: Option<&str>,
    ) -> Result<Invoice, AppError> {
        let sql = format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2::double precision) RETURNING {}",
            INVOICE_COLUMNS
        );
        tracing::debug!(sql = %sql, comp_code = ?comp_code, amt = ?amt, "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(comp_code)
            .bind(amt)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Set `amt` and move `paid` to `requested_paid` (unchanged when None), deriving
    /// `paid_date` from the locked current row. Returns None when no invoice has `id`.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        amt: Option<&str>,
        requested_paid: Option<bool>,
    ) -> Result<Option<Invoice>, AppError> {
        let mut tx = pool.begin().await?;

        let current: Option<(bool, Option<DateTime<Utc>>)> =
            sqlx::query_as("SELECT paid, paid_date FROM invoices WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((paid, paid_date)) = current else {
            return Ok(None);
        };

        let new_paid = requested_paid.unwrap_or(paid);
        let new_paid_date = next_paid_date(paid, paid_date, new_paid, Utc::now());
        if new_paid != paid {
            tracing::info!(id, paid = new_paid, "invoice paid status changed");
        }

        let sql = format!(
            r#"
            UPDATE invoices
            SET amt = $1::double precision, paid = $2, paid_date = $3
            WHERE id = $4
            RETURNING {}
            "#,
            INVOICE_COLUMNS
        );
        tracing::debug!(sql = %sql, id, amt = ?amt, "query (tx)");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(amt)
            .bind(new_paid)
            .bind(new_paid_date)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    /// Delete by id; returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, AppError> {
        let sql = "DELETE FROM invoices WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn unpaid_to_paid_stamps_now() {
        assert_eq!(next_paid_date(false, None, true, at(100)), Some(at(100)));
    }

    #[test]
    fn paid_to_unpaid_clears_date() {
        assert_eq!(next_paid_date(true, Some(at(50)), false, at(100)), None);
    }

    #[test]
    fn unchanged_status_keeps_prior_date() {
        assert_eq!(next_paid_date(true, Some(at(50)), true, at(100)), Some(at(50)));
        assert_eq!(next_paid_date(false, None, false, at(100)), None);
    }

    #[test]
    fn invoice_serializes_with_null_paid_date() {
        let invoice = Invoice {
            id: 7,
            comp_code: "netflix".into(),
            amt: 120.0,
            paid: false,
            add_date: at(0),
            paid_date: None,
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["comp_code"], "netflix");
        assert_eq!(json["amt"].as_f64(), Some(120.0));
        assert_eq!(json["paid"], false);
        assert!(json["paid_date"].is_null());
        assert_eq!(json["add_date"], "1970-01-01T00:00:00Z");
    }
}
