//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Update payloads are distinct optional-field structs: a field left
//! out of the request leaves the stored value unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Category, CategoryId, Money, PaymentTransaction, PaymentTransactionId, Product, ProductId,
    Transaction, TransactionId, TransactionItem, TransactionItemId, User, UserId, UserRole,
};

// ─────────────────────────────────────────────────────────────────────────────
// Error envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Body returned for every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// Stable error code
    #[schema(example = 101)]
    pub code: u16,
    /// Human-readable message
    #[schema(example = "User not found")]
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// User DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Alice Example")]
    pub full_name: String,
    /// Login name, unique among active users
    #[schema(example = "alice")]
    pub user_name: String,
}

/// Partial update of a user; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub user_name: Option<String>,
    pub role: Option<UserRole>,
}

/// A user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    #[schema(example = "Alice Example")]
    pub full_name: String,
    #[schema(example = "alice")]
    pub user_name: String,
    pub role: UserRole,
    /// Balance in minor currency units (cents)
    #[schema(example = 1000)]
    pub balance: Money,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            user_name: user.user_name,
            role: user.role,
            balance: user.balance,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment (balance top-up) DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to credit a user's balance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FillBalanceRequest {
    pub user_id: UserId,
    /// Amount to credit in minor currency units (cents)
    #[schema(example = 500)]
    pub amount: Money,
}

/// One recorded balance top-up.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: PaymentTransactionId,
    pub user_id: UserId,
    /// Credited amount in minor currency units (cents)
    #[schema(example = 500)]
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl From<PaymentTransaction> for PaymentResponse {
    fn from(payment: PaymentTransaction) -> Self {
        Self {
            id: payment.id,
            user_id: payment.user_id,
            amount: payment.amount,
            date: payment.date,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Category DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new category; all fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Beverages")]
    pub name: String,
    /// Ascending list position
    #[schema(example = 1)]
    pub sort_order: i64,
    #[schema(example = "Hot and cold drinks")]
    pub description: String,
}

/// Partial update of a category; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub sort_order: Option<i64>,
    pub description: Option<String>,
}

/// A category as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: CategoryId,
    #[schema(example = "Beverages")]
    pub name: String,
    #[schema(example = 1)]
    pub sort_order: i64,
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            sort_order: category.sort_order,
            description: category.description,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Product DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Espresso")]
    pub name: String,
    /// Initial stock count
    #[schema(example = 10)]
    pub count: i64,
    pub category_id: CategoryId,
}

/// Partial update of a product; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub count: Option<i64>,
    pub category_id: Option<CategoryId>,
}

/// A product as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: ProductId,
    #[schema(example = "Espresso")]
    pub name: String,
    #[schema(example = 10)]
    pub count: i64,
    pub category_id: CategoryId,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            count: product.count,
            category_id: product.category_id,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// One requested purchase line.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionItem {
    pub product_id: ProductId,
    #[schema(example = 3)]
    pub count: i64,
    /// Unit amount in minor currency units (cents)
    #[schema(example = 250)]
    pub amount: Money,
}

/// Request to create a purchase for a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    pub user_id: UserId,
    pub items: Vec<CreateTransactionItem>,
}

/// A purchase header as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub user_id: UserId,
    /// Total in minor currency units (cents)
    #[schema(example = 850)]
    pub total_amount: Money,
    pub date: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            user_id: transaction.user_id,
            total_amount: transaction.total_amount,
            date: transaction.date,
        }
    }
}

/// A purchase line as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionItemResponse {
    pub id: TransactionItemId,
    pub transaction_id: TransactionId,
    pub product_id: ProductId,
    #[schema(example = 3)]
    pub count: i64,
    /// Unit amount in minor currency units (cents)
    #[schema(example = 250)]
    pub amount: Money,
    /// Line total in minor currency units (cents)
    #[schema(example = 750)]
    pub total_amount: Money,
}

impl From<TransactionItem> for TransactionItemResponse {
    fn from(item: TransactionItem) -> Self {
        Self {
            id: item.id,
            transaction_id: item.transaction_id,
            product_id: item.product_id,
            count: item.count,
            amount: item.amount,
            total_amount: item.total_amount,
        }
    }
}
