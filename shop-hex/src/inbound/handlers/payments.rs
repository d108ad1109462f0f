//! Balance top-up endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use shop_types::{FillBalanceRequest, PageRequest, PaymentTransactionId, ShopRepository, UserId};

use super::{ApiError, AppState, parse_id};

#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id))]
pub async fn fill_balance<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<FillBalanceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.payments.fill_balance(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[tracing::instrument(skip(state))]
pub async fn list_payments<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.payments.get_all(page).await?;
    Ok(Json(payments))
}

#[tracing::instrument(skip(state), fields(user_id = %user_id))]
pub async fn payment_history<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(user_id): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = parse_id(&user_id, "user")?;
    let history = state.payments.get_history(user_id, page).await?;
    Ok(Json(history))
}

#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: PaymentTransactionId = parse_id(&id, "payment transaction")?;
    let payment = state.payments.get_one(id).await?;
    Ok(Json(payment))
}

#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete_payment<R: ShopRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: PaymentTransactionId = parse_id(&id, "payment transaction")?;
    state.payments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
