//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use shop_types::domain::{
    CategoryId, Money, PaymentTransactionId, ProductId, PurchaseRecord, TransactionId,
    TransactionItemId, UserId, UserRole,
};
use shop_types::dto::{
    CategoryResponse, CreateCategoryRequest, CreateProductRequest, CreateTransactionItem,
    CreateTransactionRequest, CreateUserRequest, ErrorMessage, FillBalanceRequest,
    PaymentResponse, ProductResponse, TransactionItemResponse, TransactionResponse,
    UpdateCategoryRequest, UpdateProductRequest, UpdateUserRequest, UserResponse,
};
use shop_types::page::{Page, PageRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "User name already taken", body = ErrorMessage)
    )
)]
async fn create_user() {}

/// List users (paginated)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of active users", body = Page<UserResponse>)
    )
)]
async fn list_users() {}

/// Get user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = UserId, Path, description = "User id")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 400, description = "User not found", body = ErrorMessage)
    )
)]
async fn get_user() {}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = UserId, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "User not found or name taken", body = ErrorMessage)
    )
)]
async fn update_user() {}

/// Soft-delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = UserId, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "User not found", body = ErrorMessage)
    )
)]
async fn delete_user() {}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// Credit a user's balance
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = FillBalanceRequest,
    responses(
        (status = 201, description = "Top-up recorded", body = PaymentResponse),
        (status = 400, description = "User not found or invalid amount", body = ErrorMessage)
    )
)]
async fn fill_balance() {}

/// List top-ups (paginated)
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of top-ups", body = Page<PaymentResponse>)
    )
)]
async fn list_payments() {}

/// Top-up history of one user
#[utoipa::path(
    get,
    path = "/api/payments/user/{user_id}",
    tag = "payments",
    params(
        ("user_id" = UserId, Path, description = "User id"),
        PageRequest
    ),
    responses(
        (status = 200, description = "One page of the user's top-ups; empty when there are none", body = Page<PaymentResponse>),
        (status = 400, description = "User not found", body = ErrorMessage)
    )
)]
async fn payment_history() {}

/// Get top-up by id
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "payments",
    params(("id" = PaymentTransactionId, Path, description = "Payment transaction id")),
    responses(
        (status = 200, description = "Top-up details", body = PaymentResponse),
        (status = 400, description = "Payment transaction not found", body = ErrorMessage)
    )
)]
async fn get_payment() {}

/// Soft-delete a top-up record
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "payments",
    params(("id" = PaymentTransactionId, Path, description = "Payment transaction id")),
    responses(
        (status = 204, description = "Top-up deleted"),
        (status = 400, description = "Payment transaction not found", body = ErrorMessage)
    )
)]
async fn delete_payment() {}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request", body = ErrorMessage)
    )
)]
async fn create_category() {}

/// List categories ascending by sort order (paginated)
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of categories", body = Page<CategoryResponse>)
    )
)]
async fn list_categories() {}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = CategoryId, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 400, description = "Category not found", body = ErrorMessage)
    )
)]
async fn get_category() {}

/// Partially update a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = CategoryId, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated category", body = CategoryResponse),
        (status = 400, description = "Category not found", body = ErrorMessage)
    )
)]
async fn update_category() {}

/// Soft-delete a category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = CategoryId, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Category not found", body = ErrorMessage)
    )
)]
async fn delete_category() {}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Category not found", body = ErrorMessage)
    )
)]
async fn create_product() {}

/// List products (paginated)
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of products", body = Page<ProductResponse>)
    )
)]
async fn list_products() {}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = ProductId, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 400, description = "Product not found", body = ErrorMessage)
    )
)]
async fn get_product() {}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = ProductId, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 400, description = "Product or target category not found", body = ErrorMessage)
    )
)]
async fn update_product() {}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = ProductId, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Product not found", body = ErrorMessage)
    )
)]
async fn delete_product() {}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// Create a purchase
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Purchase recorded", body = TransactionResponse),
        (status = 400, description = "Insufficient balance or stock", body = ErrorMessage)
    )
)]
async fn create_transaction() {}

/// List transactions (paginated)
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "transactions",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of transactions", body = Page<TransactionResponse>)
    )
)]
async fn list_transactions() {}

/// Get transaction by id
#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = "transactions",
    params(("id" = TransactionId, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Transaction details", body = TransactionResponse),
        (status = 400, description = "Transaction not found", body = ErrorMessage)
    )
)]
async fn get_transaction() {}

/// Soft-delete a transaction
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = "transactions",
    params(("id" = TransactionId, Path, description = "Transaction id")),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 400, description = "Transaction not found", body = ErrorMessage)
    )
)]
async fn delete_transaction() {}

/// Purchase history of one user
#[utoipa::path(
    get,
    path = "/api/transactions/user/{user_id}/products",
    tag = "transactions",
    params(
        ("user_id" = UserId, Path, description = "User id"),
        PageRequest
    ),
    responses(
        (status = 200, description = "One page of purchased products; empty when there are none", body = Page<PurchaseRecord>)
    )
)]
async fn user_purchases() {}

/// Purchased lines of one transaction
#[utoipa::path(
    get,
    path = "/api/transactions/{id}/products",
    tag = "transactions",
    params(
        ("id" = TransactionId, Path, description = "Transaction id"),
        PageRequest
    ),
    responses(
        (status = 200, description = "One page of purchased products", body = Page<PurchaseRecord>)
    )
)]
async fn transaction_purchases() {}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction items
// ─────────────────────────────────────────────────────────────────────────────

/// List transaction items (paginated)
#[utoipa::path(
    get,
    path = "/api/transaction-items",
    tag = "transaction-items",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of transaction items", body = Page<TransactionItemResponse>)
    )
)]
async fn list_transaction_items() {}

/// Get transaction item by id
#[utoipa::path(
    get,
    path = "/api/transaction-items/{id}",
    tag = "transaction-items",
    params(("id" = TransactionItemId, Path, description = "Transaction item id")),
    responses(
        (status = 200, description = "Transaction item details", body = TransactionItemResponse),
        (status = 400, description = "Transaction item not found", body = ErrorMessage)
    )
)]
async fn get_transaction_item() {}

/// Soft-delete a transaction item
#[utoipa::path(
    delete,
    path = "/api/transaction-items/{id}",
    tag = "transaction-items",
    params(("id" = TransactionItemId, Path, description = "Transaction item id")),
    responses(
        (status = 204, description = "Transaction item deleted"),
        (status = 400, description = "Transaction item not found", body = ErrorMessage)
    )
)]
async fn delete_transaction_item() {}

/// OpenAPI documentation for the shop API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Transaction Service API",
        version = "1.0.0",
        description = "CRUD backend for users, categories, products, and purchases with soft-delete semantics, balance top-ups, and purchase history.\n\nAll rejected requests return `{code, message}`; domain failures use HTTP 400.",
    ),
    paths(
        health,
        create_user,
        list_users,
        get_user,
        update_user,
        delete_user,
        fill_balance,
        list_payments,
        payment_history,
        get_payment,
        delete_payment,
        create_category,
        list_categories,
        get_category,
        update_category,
        delete_category,
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
        create_transaction,
        list_transactions,
        get_transaction,
        delete_transaction,
        user_purchases,
        transaction_purchases,
        list_transaction_items,
        get_transaction_item,
        delete_transaction_item,
    ),
    components(
        schemas(
            ErrorMessage,
            Money,
            UserId,
            UserRole,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            PaymentTransactionId,
            FillBalanceRequest,
            PaymentResponse,
            CategoryId,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CategoryResponse,
            ProductId,
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            TransactionId,
            TransactionItemId,
            CreateTransactionItem,
            CreateTransactionRequest,
            TransactionResponse,
            TransactionItemResponse,
            PurchaseRecord,
            Page<UserResponse>,
            Page<PaymentResponse>,
            Page<CategoryResponse>,
            Page<ProductResponse>,
            Page<TransactionResponse>,
            Page<TransactionItemResponse>,
            Page<PurchaseRecord>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management"),
        (name = "payments", description = "Balance top-ups and their history"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Products and stock"),
        (name = "transactions", description = "Purchases and purchase history"),
        (name = "transaction-items", description = "Individual purchase lines"),
    )
)]
pub struct ApiDoc;
