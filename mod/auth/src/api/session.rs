use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use catalog_core::ServiceError;

use crate::api::AppState;
use crate::model::{LoginRequest, RefreshTokenRequest, SessionTokens};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/token/refresh", post(refresh))
        .route("/logout", post(logout))
}

/// POST /auth/login — verify credentials, issue a token pair.
async fn login(
    State(svc): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionTokens>, ServiceError> {
    let tokens = svc
        .authenticate(&body.username, &body.password)
        .map_err(ServiceError::from)?;
    Ok(Json(tokens))
}

/// POST /auth/token/refresh — exchange a refresh token for a new pair.
async fn refresh(
    State(svc): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<Json<SessionTokens>, ServiceError> {
    let tokens = svc.refresh(&body.refresh_token).map_err(ServiceError::from)?;
    Ok(Json(tokens))
}

/// POST /auth/logout — revoke the refresh token. 204 regardless of
/// whether the token existed.
async fn logout(
    State(svc): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<StatusCode, ServiceError> {
    svc.revoke(&body.refresh_token).map_err(ServiceError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
