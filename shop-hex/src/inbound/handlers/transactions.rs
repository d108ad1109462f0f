//! Transaction (purchase) endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use shop_types::{CreateTransactionRequest, PageRequest, ShopRepository, TransactionId, UserId};

use super::{ApiError, AppState, parse_id};

#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id))]
pub async fn create_transaction<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = state.transactions.create(req).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

#[tracing::instrument(skip(state))]
pub async fn list_transactions<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state.transactions.get_all(page).await?;
    Ok(Json(transactions))
}

#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TransactionId = parse_id(&id, "transaction")?;
    let transaction = state.transactions.get_one(id).await?;
    Ok(Json(transaction))
}

#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn delete_transaction<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TransactionId = parse_id(&id, "transaction")?;
    state.transactions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// All products a user has purchased, flattened across transactions.
#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn user_purchases<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(user_id): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = parse_id(&user_id, "user")?;
    let records = state.transactions.purchased_products(user_id, page).await?;
    Ok(Json(records))
}

/// The purchased lines of one transaction.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn transaction_purchases<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TransactionId = parse_id(&id, "transaction")?;
    let records = state.transactions.transaction_products(id, page).await?;
    Ok(Json(records))
}
