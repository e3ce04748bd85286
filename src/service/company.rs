//! Company queries.

use crate::error::AppError;
use crate::service::invoice::Invoice;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A company with its invoices and the names of its industries.
#[derive(Clone, Debug, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<Invoice>,
    pub industries: Vec<String>,
}

pub struct CompanyService;

impl CompanyService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, AppError> {
        let sql = "SELECT code, name, description FROM companies";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Company>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, code: &str) -> Result<Option<Company>, AppError> {
        let sql = "SELECT code, name, description FROM companies WHERE code = $1";
        tracing::debug!(sql = %sql, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(sql)
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Load the company plus its invoices and industry names. The three reads are
    /// independent statements, not a snapshot.
    pub async fn detail(pool: &PgPool, code: &str) -> Result<Option<CompanyDetail>, AppError> {
        let Some(company) = Self::find(pool, code).await? else {
            return Ok(None);
        };
        let invoices = crate::service::InvoiceService::list_for_company(pool, code).await?;

        let sql = r#"
            SELECT i.name
            FROM industries i
            JOIN company_industries ci ON ci.ind_code = i.code
            WHERE ci.comp_code = $1
            ORDER BY i.name
        "#;
        tracing::debug!(sql = %sql, code = %code, "query");
        let industries: Vec<String> = sqlx::query_scalar(sql).bind(code).fetch_all(pool).await?;

        Ok(Some(CompanyDetail {
            company,
            invoices,
            industries,
        }))
    }

    /// Insert a company. A duplicate `code` surfaces as the driver's unique violation.
    pub async fn create(
        pool: &PgPool,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Company, AppError> {
        let sql = r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
        "#;
        tracing::debug!(sql = %sql, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(sql)
            .bind(code)
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Overwrite name and description. Returns None when no company has `code`.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Company>, AppError> {
        let sql = r#"
            UPDATE companies
            SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
        "#;
        tracing::debug!(sql = %sql, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(sql)
            .bind(name)
            .bind(description)
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete by code; returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, code: &str) -> Result<u64, AppError> {
        let sql = "DELETE FROM companies WHERE code = $1";
        tracing::debug!(sql = %sql, code = %code, "query");
        let result = sqlx::query(sql).bind(code).execute(pool).await?;
        Ok(result.rows_affected())
    }
}
