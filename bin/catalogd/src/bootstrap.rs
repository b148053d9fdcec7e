//! Bootstrap — first-start checks and seed-user creation.
//!
//! When catalogd starts:
//! 1. Verify the config has a signing secret and a data dir — refuse to
//!    start otherwise.
//! 2. Ensure the configured seed user exists so the service is usable
//!    out of the box.

use std::sync::Arc;

use tracing::info;

use auth::model::CreateUser;
use auth::service::AuthService;

use crate::config::{SeedConfig, ServerConfig};

/// Verify server configuration is ready for production use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.jwt.secret.is_empty() {
        anyhow::bail!("JWT secret is empty in configuration.");
    }
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    Ok(())
}

/// Ensure the seed user exists. Creates it if missing.
///
/// The password is hashed with argon2id inside the auth service; the
/// plaintext only lives in the config file.
pub fn ensure_seed_user(
    svc: &Arc<AuthService>,
    seed: &SeedConfig,
) -> anyhow::Result<()> {
    if svc
        .find_user_by_username(&seed.username)
        .map_err(|e| anyhow::anyhow!("seed-user lookup failed: {}", e))?
        .is_some()
    {
        info!("Seed user {} already exists", seed.username);
        return Ok(());
    }

    svc.create_user(CreateUser {
        username: seed.username.clone(),
        password: seed.password.clone(),
        first_name: seed.first_name.clone(),
        last_name: seed.last_name.clone(),
        roles: seed.roles.clone(),
    })
    .map_err(|e| anyhow::anyhow!("failed to create seed user: {}", e))?;
    info!("Created seed user {}", seed.username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_sql::SqliteStore;

    use auth::service::{AuthConfig, AuthService};

    use super::*;
    use crate::config::{JwtConfig, StorageConfig};

    fn config(secret: &str, data_dir: &str) -> ServerConfig {
        ServerConfig {
            jwt: JwtConfig {
                secret: secret.to_string(),
                issuer: "catalogd".to_string(),
                access_ttl_secs: 43_200,
                refresh_ttl_secs: 604_800,
            },
            storage: StorageConfig {
                data_dir: data_dir.to_string(),
            },
            seed: None,
        }
    }

    fn seed() -> SeedConfig {
        SeedConfig {
            username: "user@data.io".to_string(),
            password: "P@assword123.0".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            roles: vec!["user".to_string()],
        }
    }

    #[test]
    fn verify_config_rejects_empty_secret() {
        assert!(verify_config(&config("", "/tmp")).is_err());
        assert!(verify_config(&config("s3cret", "")).is_err());
        assert!(verify_config(&config("s3cret", "/tmp")).is_ok());
    }

    #[test]
    fn seed_user_is_created_once() {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        let svc = AuthService::new(sql, AuthConfig::default()).unwrap();

        ensure_seed_user(&svc, &seed()).unwrap();
        let user = svc.find_user_by_username("user@data.io").unwrap().unwrap();

        // Running bootstrap again must not create a duplicate or reset
        // the existing record.
        ensure_seed_user(&svc, &seed()).unwrap();
        let again = svc.find_user_by_username("user@data.io").unwrap().unwrap();
        assert_eq!(again.id, user.id);

        // The seeded credentials actually log in.
        assert!(svc.authenticate("user@data.io", "P@assword123.0").is_ok());
    }
}
