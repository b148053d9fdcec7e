use chrono::{DateTime, Utc};
use uuid::Uuid;

use catalog_sql::{Row, Value};

use crate::model::RefreshTokenRecord;
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Persist a new refresh token for a user.
    ///
    /// The id is a fresh dashed UUIDv4 — the table's primary key makes
    /// reuse impossible. `now` is the single clock read of the calling
    /// operation and stamps both timestamps.
    pub fn create_refresh_token(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, AuthError> {
        let record = RefreshTokenRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            created_at: now.timestamp(),
            expires_at: now.timestamp() + self.config.refresh_token_ttl,
        };

        self.sql
            .exec(
                "INSERT INTO refresh_tokens (id, user_id, created_at, expires_at)
                 VALUES (?1, ?2, ?3, ?4)",
                &[
                    Value::Text(record.id.clone()),
                    Value::Text(record.user_id.clone()),
                    Value::Integer(record.created_at),
                    Value::Integer(record.expires_at),
                ],
            )
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        Ok(record)
    }

    /// Look up a refresh token that has not expired.
    ///
    /// The expiry check lives in the query predicate: an expired row and
    /// a row that never existed produce the identical
    /// [`AuthError::InvalidRefreshToken`].
    pub fn find_valid_refresh_token(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, AuthError> {
        let rows = self.sql
            .query(
                "SELECT id, user_id, created_at, expires_at FROM refresh_tokens
                 WHERE id = ?1 AND expires_at > ?2",
                &[Value::Text(id.to_string()), Value::Integer(now.timestamp())],
            )
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let row = rows.first().ok_or(AuthError::InvalidRefreshToken)?;
        record_from_row(row)
    }

    /// Delete a refresh token. Idempotent: the affected-row count is not
    /// checked, so deleting an unknown or already-deleted id succeeds.
    pub fn delete_refresh_token(&self, id: &str) -> Result<(), AuthError> {
        self.sql
            .exec(
                "DELETE FROM refresh_tokens WHERE id = ?1",
                &[Value::Text(id.to_string())],
            )
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(())
    }
}

fn record_from_row(row: &Row) -> Result<RefreshTokenRecord, AuthError> {
    let missing = |col: &str| AuthError::Internal(format!("missing {} column", col));
    Ok(RefreshTokenRecord {
        id: row.get_str("id").ok_or_else(|| missing("id"))?.to_string(),
        user_id: row
            .get_str("user_id")
            .ok_or_else(|| missing("user_id"))?
            .to_string(),
        created_at: row.get_i64("created_at").ok_or_else(|| missing("created_at"))?,
        expires_at: row.get_i64("expires_at").ok_or_else(|| missing("expires_at"))?,
    })
}
