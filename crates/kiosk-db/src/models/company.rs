//! Company model for the per-tenant schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

use crate::error::DbError;

/// A company within a tenant.
///
/// Every tenant starts with exactly one company created at provisioning
/// time; users act on behalf of the companies they are members of.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company.
    pub id: Uuid,

    /// Display name of the company.
    pub name: String,

    /// When the company was created.
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Create a new company.
    pub async fn create<'e>(executor: impl PgExecutor<'e>, name: &str) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO companies (name) VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(executor)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Find a company by id.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT id, name, created_at FROM companies WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Companies a user is a member of, oldest first.
    pub async fn list_for_user<'e>(
        executor: impl PgExecutor<'e>,
        user_id: Uuid,
    ) -> Result<Vec<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT c.id, c.name, c.created_at
            FROM companies c
            JOIN user_companies uc ON uc.company_id = c.id
            WHERE uc.user_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(DbError::QueryFailed)
    }
}
