//! Industry queries and company associations.

use crate::error::AppError;
use serde::Serialize;
use sqlx::PgPool;

/// An industry with the codes of its associated companies.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Industry {
    pub code: String,
    pub name: String,
    pub companies: Vec<String>,
}

/// Industries left-joined to their companies, one row per industry.
const SELECT_WITH_COMPANIES: &str = r#"
    SELECT i.code,
           i.name,
           COALESCE(
               array_agg(ci.comp_code ORDER BY ci.comp_code) FILTER (WHERE ci.comp_code IS NOT NULL),
               ARRAY[]::text[]
           ) AS companies
    FROM industries i
    LEFT JOIN company_industries ci ON ci.ind_code = i.code
"#;

pub struct IndustryService;

impl IndustryService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Industry>, AppError> {
        let sql = format!("{} GROUP BY i.code, i.name ORDER BY i.code", SELECT_WITH_COMPANIES);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Industry>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, code: &str) -> Result<Option<Industry>, AppError> {
        let sql = format!(
            "{} WHERE i.code = $1 GROUP BY i.code, i.name",
            SELECT_WITH_COMPANIES
        );
        tracing::debug!(sql = %sql, code = %code, "query");
        let row = sqlx::query_as::<_, Industry>(&sql)
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, code: Option<&str>, name: Option<&str>) -> Result<Industry, AppError> {
        let sql = r#"
            INSERT INTO industries (code, name)
            VALUES ($1, $2)
            RETURNING code, name, ARRAY[]::text[] AS companies
        "#;
        tracing::debug!(sql = %sql, code = ?code, "query");
        let row = sqlx::query_as::<_, Industry>(sql)
            .bind(code)
            .bind(name)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Link `comp_code` to `ind_code` and return the industry with its full company list.
    /// Linking an existing pair is a no-op; an unknown code on either side is a
    /// foreign-key violation from the driver.
    pub async fn associate(
        pool: &PgPool,
        ind_code: &str,
        comp_code: Option<&str>,
    ) -> Result<Option<Industry>, AppError> {
        let sql = r#"
            INSERT INTO company_industries (comp_code, ind_code)
            VALUES ($1, $2)
            ON CONFLICT (comp_code, ind_code) DO NOTHING
        "#;
        tracing::debug!(sql = %sql, ind_code = %ind_code, comp_code = ?comp_code, "query");
        sqlx::query(sql)
            .bind(comp_code)
            .bind(ind_code)
            .execute(pool)
            .await?;
        Self::find(pool, ind_code).await
    }

    /// Delete by code; returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, code: &str) -> Result<u64, AppError> {
        let sql = "DELETE FROM industries WHERE code = $1";
        tracing::debug!(sql = %sql, code = %code, "query");
        let result = sqlx::query(sql).bind(code).execute(pool).await?;
        Ok(result.rows_affected())
    }
}
