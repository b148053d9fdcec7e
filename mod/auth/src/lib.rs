//! Auth module — username/password login and the session-token lifecycle.
//!
//! # Resources
//!
//! - **User** — identity with an argon2id password hash and role names
//! - **RefreshToken** — persisted opaque token, exchanged for new access tokens
//!
//! # Endpoints (mounted under `/auth`)
//!
//! - `POST /login` — verify credentials, issue an access/refresh pair
//! - `POST /token/refresh` — exchange a valid refresh token for a new pair
//! - `POST /logout` — revoke a refresh token (always 204)
//!
//! ```ignore
//! use auth::{AuthModule, service::AuthConfig};
//!
//! let module = AuthModule::new(sql, AuthConfig::default())?;
//! let router = module.routes(); // Mount under /auth
//! ```

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use catalog_core::Module;
use catalog_sql::SQLStore;

use crate::service::{AuthConfig, AuthService};

/// Auth module implementing the Module trait.
///
/// Holds the AuthService and provides HTTP routes for the session endpoints.
pub struct AuthModule {
    service: Arc<AuthService>,
}

impl AuthModule {
    /// Create a new AuthModule.
    pub fn new(
        sql: Arc<dyn SQLStore>,
        config: AuthConfig,
    ) -> Result<Self, catalog_core::ServiceError> {
        let service = AuthService::new(sql, config)
            .map_err(catalog_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// Get a reference to the underlying AuthService.
    pub fn service(&self) -> &Arc<AuthService> {
        &self.service
    }
}

impl Module for AuthModule {
    fn name(&self) -> &str {
        "auth"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
