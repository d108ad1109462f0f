//! HTTP request handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use shop_types::{AppError, DomainError, ErrorMessage, ShopRepository};

use crate::service::{
    CategoryService, PaymentService, ProductService, TransactionItemService, TransactionService,
    UserService,
};

pub mod categories;
pub mod payments;
pub mod products;
pub mod transaction_items;
pub mod transactions;
pub mod users;

/// Application state shared across handlers.
///
/// All services share one repository adapter behind the `Arc`.
pub struct AppState<R: ShopRepository> {
    pub users: UserService<R>,
    pub payments: PaymentService<R>,
    pub categories: CategoryService<R>,
    pub products: ProductService<R>,
    pub transactions: TransactionService<R>,
    pub transaction_items: TransactionItemService<R>,
}

impl<R: ShopRepository> AppState<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            users: UserService::new(repo.clone()),
            payments: PaymentService::new(repo.clone()),
            categories: CategoryService::new(repo.clone()),
            products: ProductService::new(repo.clone()),
            transactions: TransactionService::new(repo.clone()),
            transaction_items: TransactionItemService::new(repo),
        }
    }
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(AppError::Domain(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Domain(e) => {
                let body = ErrorMessage {
                    code: e.code(),
                    message: e.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                let body = ErrorMessage {
                    code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    message: "internal error".into(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Parses a path parameter into an entity id, rejecting garbage with a
/// validation failure instead of a routing 404.
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| DomainError::Validation(format!("invalid {what} id")).into())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
