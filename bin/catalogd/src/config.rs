//! Server configuration, loaded from a TOML file.

use std::path::Path;

use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: Option<SeedConfig>,
}

/// JWT issuance settings.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// HMAC signing secret.
    pub secret: String,

    /// Issuer name stamped into every access token.
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_secs: i64,

    /// Refresh token lifetime in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_secs: i64,
}

/// Storage locations.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for the SQLite database.
    pub data_dir: String,
}

/// Optional user seeded at startup if the username is not yet present.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

fn default_issuer() -> String {
    "catalogd".to_string()
}

fn default_access_ttl() -> i64 {
    43_200 // 12h
}

fn default_refresh_ttl() -> i64 {
    604_800 // 7 days
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            [jwt]
            secret = "s3cret"

            [storage]
            data_dir = "/var/lib/catalogd"
            "#,
        )
        .unwrap();

        assert_eq!(config.jwt.secret, "s3cret");
        assert_eq!(config.jwt.issuer, "catalogd");
        assert_eq!(config.jwt.access_ttl_secs, 43_200);
        assert_eq!(config.jwt.refresh_ttl_secs, 604_800);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config: ServerConfig = toml::from_str(
            r#"
            [jwt]
            secret = "s3cret"
            issuer = "product-service"
            access_ttl_secs = 3600

            [storage]
            data_dir = "/tmp/catalog"

            [seed]
            username = "user@data.io"
            password = "P@assword123.0"
            first_name = "John"
            last_name = "Doe"
            roles = ["user", "admin"]
            "#,
        )
        .unwrap();

        assert_eq!(config.jwt.issuer, "product-service");
        assert_eq!(config.jwt.access_ttl_secs, 3600);
        let seed = config.seed.unwrap();
        assert_eq!(seed.username, "user@data.io");
        assert_eq!(seed.roles, vec!["user".to_string(), "admin".to_string()]);
    }
}
