use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::user::User;

/// An authenticated identity, snapshotted at token-issuance time.
///
/// This is the value embedded in the `user_data` claim of every access
/// token. It is a narrow copy of the claim-relevant [`User`] fields —
/// structurally it cannot carry the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl Principal {
    /// Snapshot a stored user into a principal.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            roles: user.authorities(),
        }
    }
}

/// Role-name lookup for anything that can act as an identity.
pub trait Authorities {
    /// The set of role names granted to this identity.
    fn authorities(&self) -> BTreeSet<String>;
}

impl Authorities for User {
    fn authorities(&self) -> BTreeSet<String> {
        self.roles.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "user@data.io".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$hash".into(),
            roles: vec!["admin".into(), "user".into(), "admin".into()],
            created_at: "2024-01-01T00:00:00+00:00".into(),
            updated_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn snapshot_carries_no_password() {
        let p = Principal::from_user(&user());
        let json = serde_json::to_value(&p).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("password_hash"));
        assert_eq!(obj["username"], "user@data.io");
    }

    #[test]
    fn authorities_deduplicate_roles() {
        let roles = user().authorities();
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("admin"));
        assert!(roles.contains("user"));
    }
}
