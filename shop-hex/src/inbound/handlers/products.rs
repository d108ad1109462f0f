//! Product endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use shop_types::{CreateProductRequest, PageRequest, ProductId, ShopRepository, UpdateProductRequest};

use super::{ApiError, AppState, parse_id};

#[tracing::instrument(skip(state, req))]
pub async fn create_product<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.products.create(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[tracing::instrument(skip(state))]
pub async fn list_products<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.products.get_all(page).await?;
    Ok(Json(products))
}

#[tracing::instrument(skip(state), fields(product_id = %id))]
pub async fn get_product<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = parse_id(&id, "product")?;
    let product = state.products.get_one(id).await?;
    Ok(Json(product))
}

#[tracing::instrument(skip(state, req), fields(product_id = %id))]
pub async fn update_product<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = parse_id(&id, "product")?;
    let product = state.products.update(id, req).await?;
    Ok(Json(product))
}

#[tracing::instrument(skip(state), fields(product_id = %id))]
pub async fn delete_product<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: ProductId = parse_id(&id, "product")?;
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
