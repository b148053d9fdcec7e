use catalog_core::{new_id, now_rfc3339};
use catalog_sql::Value;

use crate::model::{CreateUser, User};
use crate::service::credentials::hash_password;
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Create a new user. The password is hashed with argon2id before
    /// the record is written; the plaintext is dropped here.
    pub fn create_user(&self, input: CreateUser) -> Result<User, AuthError> {
        let now = now_rfc3339();
        let user = User {
            id: new_id(),
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash: hash_password(&input.password)?,
            roles: input.roles,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.insert_record(
            "users",
            &user.id,
            &user,
            &[
                ("username", Value::Text(user.username.clone())),
                ("created_at", Value::Text(now.clone())),
                ("updated_at", Value::Text(now)),
            ],
        )?;

        Ok(user)
    }

    /// Get a user by id.
    pub fn get_user(&self, id: &str) -> Result<User, AuthError> {
        self.get_record("users", id)
    }

    /// Find a user by username. Returns None when no such user exists.
    pub fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AuthError> {
        let rows = self.sql
            .query(
                "SELECT data FROM users WHERE username = ?1",
                &[Value::Text(username.to_string())],
            )
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let Some(row) = rows.first() else {
            return Ok(None);
        };
        let data = row
            .get_str("data")
            .ok_or_else(|| AuthError::Internal("missing data column".into()))?;
        let user = serde_json::from_str(data)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Some(user))
    }

    /// Replace a user's role set.
    ///
    /// Tokens issued via refresh after this call embed the new roles —
    /// the owner is re-resolved from the store on every refresh.
    pub fn set_user_roles(&self, id: &str, roles: Vec<String>) -> Result<User, AuthError> {
        let mut user: User = self.get_record("users", id)?;
        let now = now_rfc3339();
        user.roles = roles;
        user.updated_at = now.clone();

        self.update_record(
            "users",
            id,
            &user,
            &[("updated_at", Value::Text(now))],
        )?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil::{seed_user, test_service};

    #[test]
    fn create_and_get_user() {
        let svc = test_service();
        let user = seed_user(&svc);

        let fetched = svc.get_user(&user.id).unwrap();
        assert_eq!(fetched.username, "user@data.io");
        assert_eq!(fetched.first_name, "John");
        assert_eq!(fetched.last_name, "Doe");
        // The stored hash is not the plaintext.
        assert_ne!(fetched.password_hash, "P@assword123.0");
    }

    #[test]
    fn find_by_username() {
        let svc = test_service();
        let user = seed_user(&svc);

        let found = svc.find_user_by_username("user@data.io").unwrap();
        assert_eq!(found.unwrap().id, user.id);

        let missing = svc.find_user_by_username("nobody@data.io").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn duplicate_username_conflicts() {
        let svc = test_service();
        seed_user(&svc);

        let err = svc
            .create_user(CreateUser {
                username: "user@data.io".to_string(),
                password: "other".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                roles: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::Conflict(_)));
    }

    #[test]
    fn set_user_roles_replaces_roles() {
        let svc = test_service();
        let user = seed_user(&svc);

        let updated = svc
            .set_user_roles(&user.id, vec!["auditor".to_string()])
            .unwrap();
        assert_eq!(updated.roles, vec!["auditor".to_string()]);

        let fetched = svc.get_user(&user.id).unwrap();
        assert_eq!(fetched.roles, vec!["auditor".to_string()]);
        assert_eq!(fetched.username, "user@data.io");
    }
}
