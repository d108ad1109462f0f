//! Repository port traits.
//!
//! These are the primary ports in the hexagonal architecture; the
//! persistence adapter implements one trait per entity group. Lookups
//! and listings are soft-delete aware: they see active rows only, and
//! `trash_*` reports whether a live row was hit instead of failing on
//! its own. Multi-row writes (recording a payment, creating a purchase)
//! MUST be atomic; implementations use a database transaction and
//! surface business failures raised inside it as [`RepoError::Domain`].

use crate::domain::{
    Category, CategoryId, Money, NewTransactionItem, PaymentTransaction, PaymentTransactionId,
    Product, ProductId, PurchaseRecord, Transaction, TransactionId, TransactionItem,
    TransactionItemId, User, UserId,
};
use crate::error::RepoError;
use crate::page::{Page, PageRequest};

/// Persistence port for users.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Inserts a new user with role `USER` and zero balance, returning
    /// the stored row with its generated id.
    async fn insert_user(&self, full_name: &str, user_name: &str) -> Result<User, RepoError>;

    /// Finds an active user by id.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError>;

    /// Finds an active user by user name.
    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<User>, RepoError>;

    /// Finds an active user other than `id` holding `user_name`.
    async fn find_other_user_by_name(
        &self,
        id: UserId,
        user_name: &str,
    ) -> Result<Option<User>, RepoError>;

    /// Persists the mutable fields of an active user.
    async fn update_user(&self, user: &User) -> Result<(), RepoError>;

    /// Lists active users, paginated.
    async fn list_users(&self, page: PageRequest) -> Result<Page<User>, RepoError>;

    /// Soft-deletes an active user; false if no live row matched.
    async fn trash_user(&self, id: UserId) -> Result<bool, RepoError>;
}

/// Persistence port for categories.
#[async_trait::async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn insert_category(
        &self,
        name: &str,
        sort_order: i64,
        description: &str,
    ) -> Result<Category, RepoError>;

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepoError>;

    async fn update_category(&self, category: &Category) -> Result<(), RepoError>;

    /// Lists active categories ordered ascending by sort order.
    async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, RepoError>;

    async fn trash_category(&self, id: CategoryId) -> Result<bool, RepoError>;
}

/// Persistence port for products.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn insert_product(
        &self,
        name: &str,
        count: i64,
        category_id: CategoryId,
    ) -> Result<Product, RepoError>;

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepoError>;

    async fn update_product(&self, product: &Product) -> Result<(), RepoError>;

    async fn list_products(&self, page: PageRequest) -> Result<Page<Product>, RepoError>;

    async fn trash_product(&self, id: ProductId) -> Result<bool, RepoError>;
}

/// Persistence port for balance top-ups.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Records a top-up row and credits the user's balance in one
    /// atomic unit. Raises `UserNotFound` if the user vanished.
    async fn record_payment(
        &self,
        user_id: UserId,
        amount: Money,
    ) -> Result<PaymentTransaction, RepoError>;

    async fn find_payment(
        &self,
        id: PaymentTransactionId,
    ) -> Result<Option<PaymentTransaction>, RepoError>;

    async fn list_payments(
        &self,
        page: PageRequest,
    ) -> Result<Page<PaymentTransaction>, RepoError>;

    /// Lists a single user's active top-ups, paginated. Zero rows is
    /// an empty page, not a failure.
    async fn list_payments_for_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<PaymentTransaction>, RepoError>;

    async fn trash_payment(&self, id: PaymentTransactionId) -> Result<bool, RepoError>;
}

/// Persistence port for purchases.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Atomically writes a purchase: header, item rows, per-product
    /// stock decrements, and the balance debit. A stock shortfall or a
    /// vanished product raises the matching domain error and leaves no
    /// partial rows.
    async fn create_transaction(
        &self,
        user_id: UserId,
        total: Money,
        items: &[NewTransactionItem],
    ) -> Result<Transaction, RepoError>;

    async fn find_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError>;

    async fn list_transactions(&self, page: PageRequest) -> Result<Page<Transaction>, RepoError>;

    async fn trash_transaction(&self, id: TransactionId) -> Result<bool, RepoError>;

    /// Joined purchase-history projection for one user, paginated.
    async fn find_user_purchases(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<PurchaseRecord>, RepoError>;

    /// Joined purchase projection for one transaction, paginated.
    async fn find_transaction_purchases(
        &self,
        transaction_id: TransactionId,
        page: PageRequest,
    ) -> Result<Page<PurchaseRecord>, RepoError>;
}

/// Persistence port for purchase lines (read/delete only).
#[async_trait::async_trait]
pub trait TransactionItemRepository: Send + Sync + 'static {
    async fn find_transaction_item(
        &self,
        id: TransactionItemId,
    ) -> Result<Option<TransactionItem>, RepoError>;

    async fn list_transaction_items(
        &self,
        page: PageRequest,
    ) -> Result<Page<TransactionItem>, RepoError>;

    async fn trash_transaction_item(&self, id: TransactionItemId) -> Result<bool, RepoError>;
}

/// The full persistence surface, for wiring the adapter through the
/// service and HTTP layers with one type parameter.
pub trait ShopRepository:
    UserRepository
    + CategoryRepository
    + ProductRepository
    + PaymentRepository
    + TransactionRepository
    + TransactionItemRepository
{
}

impl<T> ShopRepository for T where
    T: UserRepository
        + CategoryRepository
        + ProductRepository
        + PaymentRepository
        + TransactionRepository
        + TransactionItemRepository
{
}
