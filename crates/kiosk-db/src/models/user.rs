//! User model for the per-tenant schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

use crate::error::DbError;

/// A user account within a tenant database.
///
/// The password is stored as an argon2id PHC hash; the plaintext never
/// reaches this crate.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TenantUser {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// Login name, unique within the tenant.
    pub login: String,

    /// Human-readable display name.
    pub display_name: String,

    /// Argon2id PHC hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the account may authenticate.
    pub active: bool,

    /// Whether this is the designated superuser account.
    pub is_superuser: bool,

    /// The user's active company.
    pub company_id: Uuid,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

const USER_COLUMNS: &str =
    "id, login, display_name, password_hash, active, is_superuser, company_id, created_at";

/// The already-suffixed guard is an exact suffix comparison. A `LIKE`
/// pattern would let each `_` in the suffix match any character, sparing
/// real logins that merely resemble mangled ones.
const DEACTIVATE_EXCEPT_SUPERUSER_SQL: &str = r#"
    UPDATE users
    SET active = FALSE,
        login = CASE
            WHEN right(login, length($1)) = $1 THEN login
            ELSE login || $1
        END
    WHERE NOT is_superuser
    "#;

impl TenantUser {
    /// Create a user account.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        login: &str,
        display_name: &str,
        password_hash: &str,
        is_superuser: bool,
        company_id: Uuid,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            INSERT INTO users (login, display_name, password_hash, is_superuser, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(login)
        .bind(display_name)
        .bind(password_hash)
        .bind(is_superuser)
        .bind(company_id)
        .fetch_one(executor)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Find an active user by login.
    ///
    /// Deactivated accounts are invisible here, so a disabled tenant's
    /// mangled accounts can never authenticate again.
    pub async fn find_active_by_login<'e>(
        executor: impl PgExecutor<'e>,
        login: &str,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users WHERE login = $1 AND active
            "#,
        ))
        .bind(login)
        .fetch_optional(executor)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Find the designated superuser account.
    pub async fn find_superuser<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users WHERE is_superuser
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        ))
        .fetch_optional(executor)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Deactivate every account except the superuser and mangle its login.
    ///
    /// The suffix is appended once per account: logins already carrying it
    /// are deactivated but not suffixed again, so repeated disablement does
    /// not compound the mangling. Returns the number of affected rows.
    pub async fn deactivate_all_except_superuser<'e>(
        executor: impl PgExecutor<'e>,
        login_suffix: &str,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(DEACTIVATE_EXCEPT_SUPERUSER_SQL)
            .bind(login_suffix)
            .execute(executor)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected())
    }

    /// Overwrite a user's password hash.
    pub async fn set_password_hash<'e>(
        executor: impl PgExecutor<'e>,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET password_hash = $2 WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(password_hash)
        .execute(executor)
        .await
        .map_err(DbError::QueryFailed)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("user {user_id}")));
        }
        Ok(())
    }

    /// Add the user to a company.
    pub async fn grant_company<'e>(
        executor: impl PgExecutor<'e>,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO user_companies (user_id, company_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(company_id)
        .execute(executor)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deactivate_guard_is_exact_suffix_comparison() {
        // A LIKE guard here once let logins such as "ndisabled@x.example"
        // (any two characters before "disabled") skip the mangling, since
        // "_" in the suffix matched arbitrary characters.
        assert!(DEACTIVATE_EXCEPT_SUPERUSER_SQL.contains("right(login, length($1)) = $1"));
        assert!(!DEACTIVATE_EXCEPT_SUPERUSER_SQL.contains("LIKE"));
    }

    #[test]
    fn test_deactivate_spares_superuser() {
        assert!(DEACTIVATE_EXCEPT_SUPERUSER_SQL.contains("WHERE NOT is_superuser"));
    }
}
