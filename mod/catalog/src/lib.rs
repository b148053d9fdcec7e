//! Catalog module — product CRUD.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use catalog_core::Module;
use catalog_sql::SQLStore;

use service::CatalogService;

/// Catalog module implementing the Module trait.
pub struct CatalogModule {
    service: Arc<CatalogService>,
}

impl CatalogModule {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, catalog_core::ServiceError> {
        let service = CatalogService::new(sql)?;
        Ok(Self {
            service: Arc::new(service),
        })
    }
}

impl Module for CatalogModule {
    fn name(&self) -> &str {
        "product"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
