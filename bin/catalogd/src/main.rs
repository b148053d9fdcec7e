//! `catalogd` — the product catalog server binary.
//!
//! Usage:
//!   catalogd -c <path-to-config.toml> [--listen <addr>]

mod auth_middleware;
mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use jsonwebtoken::{DecodingKey, Validation};
use tracing::info;

use catalog_core::Module;

use auth_middleware::JwtState;
use config::ServerConfig;

/// Product catalog server.
#[derive(Parser, Debug)]
#[command(name = "catalogd", about = "Product catalog server")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = std::path::PathBuf::from(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    bootstrap::verify_config(&server_config)?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let sql: Arc<dyn catalog_sql::SQLStore> = Arc::new(
        catalog_sql::SqliteStore::open(&data_dir.join("catalog.sqlite"))
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // ── Initialize modules ──

    let auth_config = auth::service::AuthConfig {
        issuer: server_config.jwt.issuer.clone(),
        jwt_secret: server_config.jwt.secret.clone(),
        access_token_ttl: server_config.jwt.access_ttl_secs,
        refresh_token_ttl: server_config.jwt.refresh_ttl_secs,
    };
    let auth_module = auth::AuthModule::new(Arc::clone(&sql), auth_config)?;
    info!("Auth module initialized");

    let catalog_module = catalog::CatalogModule::new(Arc::clone(&sql))?;
    info!("Catalog module initialized");

    // Bootstrap: ensure the seed user exists.
    if let Some(seed) = &server_config.seed {
        bootstrap::ensure_seed_user(auth_module.service(), seed)?;
    }

    let module_routes = vec![
        (auth_module.name(), auth_module.routes()),
        (catalog_module.name(), catalog_module.routes()),
    ];

    // Build JWT state for the middleware.
    let jwt_state = Arc::new(JwtState {
        decoding_key: DecodingKey::from_secret(server_config.jwt.secret.as_bytes()),
        validation: Validation::default(),
    });

    // Build router.
    let app = routes::build_router(jwt_state, module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("catalogd listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
