//! Error types for the shop transaction service.

use crate::domain::Money;

/// Domain-level errors (business rule violations).
///
/// Each business kind carries a stable numeric code used in the HTTP
/// error envelope and a message key a localization layer can resolve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Transaction not found")]
    TransactionNotFound,

    #[error("Transaction item not found")]
    TransactionItemNotFound,

    #[error("Payment transaction not found")]
    PaymentTransactionNotFound,

    #[error("Not enough balance: available {available}, requested {requested}")]
    NotEnoughBalance { available: Money, requested: Money },

    #[error("Not enough product in stock: available {available}, requested {requested}")]
    NotEnoughProduct { available: i64, requested: i64 },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Stable numeric code carried in the error envelope.
    pub fn code(&self) -> u16 {
        match self {
            DomainError::UserAlreadyExists => 100,
            DomainError::UserNotFound => 101,
            DomainError::CategoryNotFound => 102,
            DomainError::ProductNotFound => 103,
            DomainError::TransactionNotFound => 104,
            DomainError::TransactionItemNotFound => 105,
            DomainError::PaymentTransactionNotFound => 106,
            DomainError::NotEnoughBalance { .. } => 107,
            DomainError::NotEnoughProduct { .. } => 108,
            DomainError::Validation(_) => 400,
        }
    }

    /// Message key for localized message resolution.
    pub fn message_key(&self) -> &'static str {
        match self {
            DomainError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            DomainError::UserNotFound => "USER_NOT_FOUND",
            DomainError::CategoryNotFound => "CATEGORY_NOT_FOUND",
            DomainError::ProductNotFound => "PRODUCT_NOT_FOUND",
            DomainError::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            DomainError::TransactionItemNotFound => "TRANSACTION_ITEM_NOT_FOUND",
            DomainError::PaymentTransactionNotFound => "PAYMENT_TRANSACTION_NOT_FOUND",
            DomainError::NotEnoughBalance { .. } => "NOT_ENOUGH_BALANCE",
            DomainError::NotEnoughProduct { .. } => "NOT_ENOUGH_PRODUCT",
            DomainError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

/// Application-level errors (what services return).
///
/// Domain failures keep their kind for the HTTP envelope; data access
/// failures fold into an opaque internal error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => AppError::Domain(e),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Transaction(e) => AppError::Internal(e),
        }
    }
}
