mod session;

use std::sync::Arc;

use axum::Router;

use crate::service::AuthService;

/// Shared application state.
pub type AppState = Arc<AuthService>;

/// Build the auth API router.
///
/// All routes are relative — the caller nests them under `/auth`.
pub fn build_router(svc: Arc<AuthService>) -> Router {
    Router::new().merge(session::routes()).with_state(svc)
}
