//! User endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use shop_types::{CreateUserRequest, PageRequest, ShopRepository, UpdateUserRequest, UserId};

use super::{ApiError, AppState, parse_id};

#[tracing::instrument(skip(state, req))]
pub async fn create_user<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.create(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[tracing::instrument(skip(state))]
pub async fn list_users<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.get_all(page).await?;
    Ok(Json(users))
}

#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn get_user<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = parse_id(&id, "user")?;
    let user = state.users.get_one(id).await?;
    Ok(Json(user))
}

#[tracing::instrument(skip(state, req), fields(user_id = %id))]
pub async fn update_user<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = parse_id(&id, "user")?;
    let user = state.users.update(id, req).await?;
    Ok(Json(user))
}

#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn delete_user<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = parse_id(&id, "user")?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
