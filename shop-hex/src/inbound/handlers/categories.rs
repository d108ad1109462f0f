//! Category endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use shop_types::{
    CategoryId, CreateCategoryRequest, PageRequest, ShopRepository, UpdateCategoryRequest,
};

use super::{ApiError, AppState, parse_id};

#[tracing::instrument(skip(state, req))]
pub async fn create_category<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state.categories.create(req).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[tracing::instrument(skip(state))]
pub async fn list_categories<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.categories.get_all(page).await?;
    Ok(Json(categories))
}

#[tracing::instrument(skip(state), fields(category_id = %id))]
pub async fn get_category<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    let category = state.categories.get_one(id).await?;
    Ok(Json(category))
}

#[tracing::instrument(skip(state, req), fields(category_id = %id))]
pub async fn update_category<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    let category = state.categories.update(id, req).await?;
    Ok(Json(category))
}

#[tracing::instrument(skip(state), fields(category_id = %id))]
pub async fn delete_category<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = parse_id(&id, "category")?;
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
