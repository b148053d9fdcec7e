use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use catalog_core::{ListParams, ListResult, ServiceError};

use crate::api::AppState;
use crate::model::{CreateProduct, Product};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

async fn list_products(
    State(svc): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResult<Product>>, ServiceError> {
    svc.list_products(&params).map(Json)
}

async fn create_product(
    State(svc): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), ServiceError> {
    let product = svc.create_product(input)?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ServiceError> {
    svc.get_product(&id).map(Json)
}

async fn update_product(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<Product>, ServiceError> {
    svc.update_product(&id, patch).map(Json)
}

async fn delete_product(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_product(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
