//! Session model for the per-tenant schema.
//!
//! Sessions are created at login time only; expiry and eviction belong to
//! the host platform's session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

use crate::error::DbError;

/// A login session bound to a tenant database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TenantSession {
    /// Opaque session token handed to the client.
    pub token: String,

    /// The authenticated user.
    pub user_id: Uuid,

    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl TenantSession {
    /// Record a freshly issued session token.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        user_id: Uuid,
        token: &str,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO sessions (token, user_id)
            VALUES ($1, $2)
            RETURNING token, user_id, created_at
            "#,
        )
        .bind(token)
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(DbError::QueryFailed)
    }
}
