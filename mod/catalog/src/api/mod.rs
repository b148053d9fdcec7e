mod product;

use std::sync::Arc;

use axum::Router;

use crate::service::CatalogService;

/// Shared application state.
pub type AppState = Arc<CatalogService>;

/// Build the catalog API router.
///
/// Routes are relative — the caller nests them under `/product`.
pub fn router(state: AppState) -> Router {
    Router::new().nest("/v1", product::routes()).with_state(state)
}
