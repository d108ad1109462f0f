//! Transaction item endpoints (read/delete only).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use shop_types::{PageRequest, ShopRepository, TransactionItemId};

use super::{ApiError, AppState, parse_id};

#[tracing::instrument(skip(state))]
pub async fn list_transaction_items<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state.transaction_items.get_all(page).await?;
    Ok(Json(items))
}

#[tracing::instrument(skip(state), fields(item_id = %id))]
pub async fn get_transaction_item<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TransactionItemId = parse_id(&id, "transaction item")?;
    let item = state.transaction_items.get_one(id).await?;
    Ok(Json(item))
}

#[tracing::instrument(skip(state), fields(item_id = %id))]
pub async fn delete_transaction_item<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TransactionItemId = parse_id(&id, "transaction item")?;
    state.transaction_items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
