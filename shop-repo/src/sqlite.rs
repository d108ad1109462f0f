//! SQLite repository adapter.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use shop_types::{
    Category, CategoryId, CategoryRepository, DomainError, Money, NewTransactionItem, Page,
    PageRequest, PaymentRepository, PaymentTransaction, PaymentTransactionId, Product, ProductId,
    ProductRepository, PurchaseRecord, RepoError, Transaction, TransactionId, TransactionItem,
    TransactionItemId, TransactionItemRepository, TransactionRepository, User, UserId,
    UserRepository, UserRole,
};

use crate::types::{
    DbCategory, DbCount, DbPaymentTransaction, DbProduct, DbPurchaseRecord, DbStock,
    DbTransaction, DbTransactionItem, DbUser,
};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        tracing::debug!("database schema up to date");

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generic soft-delete helpers, shared by every entity table
    // ─────────────────────────────────────────────────────────────────────────

    /// Soft-deletes one live row; false when nothing active matched.
    async fn trash_row(&self, table: &str, id: i64) -> Result<bool, RepoError> {
        let sql = format!("UPDATE {table} SET deleted = 1 WHERE id = ? AND deleted = 0");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts active rows for pagination metadata.
    async fn count_active(&self, table: &str) -> Result<u64, RepoError> {
        let sql = format!("SELECT COUNT(*) AS n FROM {table} WHERE deleted = 0");
        let row: DbCount = sqlx::query_as(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.n as u64)
    }
}

/// Maps a unique-index violation on the active-user-name index to the
/// matching domain error; everything else stays a database failure.
fn map_user_write_err(e: sqlx::Error) -> RepoError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return RepoError::Domain(DomainError::UserAlreadyExists);
        }
    }
    RepoError::Database(e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn insert_user(&self, full_name: &str, user_name: &str) -> Result<User, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO users (full_name, user_name, role, balance) VALUES (?, ?, 'USER', 0)"#,
        )
        .bind(full_name)
        .bind(user_name)
        .execute(&self.pool)
        .await
        .map_err(map_user_write_err)?;

        Ok(User::from_parts(
            UserId::from_i64(result.last_insert_rowid()),
            full_name.to_string(),
            user_name.to_string(),
            UserRole::User,
            Money::ZERO,
            false,
        ))
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> = sqlx::query_as(
            r#"SELECT id, full_name, user_name, role, balance, deleted FROM users
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbUser::into_domain).transpose()
    }

    async fn find_user_by_name(&self, user_name: &str) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> = sqlx::query_as(
            r#"SELECT id, full_name, user_name, role, balance, deleted FROM users
               WHERE user_name = ? AND deleted = 0"#,
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbUser::into_domain).transpose()
    }

    async fn find_other_user_by_name(
        &self,
        id: UserId,
        user_name: &str,
    ) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> = sqlx::query_as(
            r#"SELECT id, full_name, user_name, role, balance, deleted FROM users
               WHERE user_name = ? AND id != ? AND deleted = 0"#,
        )
        .bind(user_name)
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbUser::into_domain).transpose()
    }

    async fn update_user(&self, user: &User) -> Result<(), RepoError> {
        sqlx::query(
            r#"UPDATE users SET full_name = ?, user_name = ?, role = ?, balance = ?
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(&user.full_name)
        .bind(&user.user_name)
        .bind(user.role.as_str())
        .bind(user.balance.minor())
        .bind(user.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_user_write_err)?;

        Ok(())
    }

    async fn list_users(&self, page: PageRequest) -> Result<Page<User>, RepoError> {
        let total = self.count_active("users").await?;

        let rows: Vec<DbUser> = sqlx::query_as(
            r#"SELECT id, full_name, user_name, role, balance, deleted FROM users
               WHERE deleted = 0 ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbUser::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn trash_user(&self, id: UserId) -> Result<bool, RepoError> {
        self.trash_row("users", id.as_i64()).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CategoryRepository for SqliteRepo {
    async fn insert_category(
        &self,
        name: &str,
        sort_order: i64,
        description: &str,
    ) -> Result<Category, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO categories (name, sort_order, description) VALUES (?, ?, ?)"#,
        )
        .bind(name)
        .bind(sort_order)
        .bind(description)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Category::from_parts(
            CategoryId::from_i64(result.last_insert_rowid()),
            name.to_string(),
            sort_order,
            description.to_string(),
            false,
        ))
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepoError> {
        let row: Option<DbCategory> = sqlx::query_as(
            r#"SELECT id, name, sort_order, description, deleted FROM categories
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbCategory::into_domain).transpose()
    }

    async fn update_category(&self, category: &Category) -> Result<(), RepoError> {
        sqlx::query(
            r#"UPDATE categories SET name = ?, sort_order = ?, description = ?
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(&category.name)
        .bind(category.sort_order)
        .bind(&category.description)
        .bind(category.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, RepoError> {
        let total = self.count_active("categories").await?;

        let rows: Vec<DbCategory> = sqlx::query_as(
            r#"SELECT id, name, sort_order, description, deleted FROM categories
               WHERE deleted = 0 ORDER BY sort_order, id LIMIT ? OFFSET ?"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbCategory::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn trash_category(&self, id: CategoryId) -> Result<bool, RepoError> {
        self.trash_row("categories", id.as_i64()).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for SqliteRepo {
    async fn insert_product(
        &self,
        name: &str,
        count: i64,
        category_id: CategoryId,
    ) -> Result<Product, RepoError> {
        let result =
            sqlx::query(r#"INSERT INTO products (name, count, category_id) VALUES (?, ?, ?)"#)
                .bind(name)
                .bind(count)
                .bind(category_id.as_i64())
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Product::from_parts(
            ProductId::from_i64(result.last_insert_rowid()),
            name.to_string(),
            count,
            category_id,
            false,
        ))
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        let row: Option<DbProduct> = sqlx::query_as(
            r#"SELECT id, name, count, category_id, deleted FROM products
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbProduct::into_domain).transpose()
    }

    async fn update_product(&self, product: &Product) -> Result<(), RepoError> {
        sqlx::query(
            r#"UPDATE products SET name = ?, count = ?, category_id = ?
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(&product.name)
        .bind(product.count)
        .bind(product.category_id.as_i64())
        .bind(product.id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn list_products(&self, page: PageRequest) -> Result<Page<Product>, RepoError> {
        let total = self.count_active("products").await?;

        let rows: Vec<DbProduct> = sqlx::query_as(
            r#"SELECT id, name, count, category_id, deleted FROM products
               WHERE deleted = 0 ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbProduct::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn trash_product(&self, id: ProductId) -> Result<bool, RepoError> {
        self.trash_row("products", id.as_i64()).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments (balance top-ups)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn record_payment(
        &self,
        user_id: UserId,
        amount: Money,
    ) -> Result<PaymentTransaction, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let credited = sqlx::query(
            r#"UPDATE users SET balance = balance + ? WHERE id = ? AND deleted = 0"#,
        )
        .bind(amount.minor())
        .bind(user_id.as_i64())
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if credited.rows_affected() == 0 {
            return Err(RepoError::Domain(DomainError::UserNotFound));
        }

        let now = Utc::now();

        let inserted = sqlx::query(
            r#"INSERT INTO payment_transactions (user_id, amount, date) VALUES (?, ?, ?)"#,
        )
        .bind(user_id.as_i64())
        .bind(amount.minor())
        .bind(now.to_rfc3339())
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(PaymentTransaction::from_parts(
            PaymentTransactionId::from_i64(inserted.last_insert_rowid()),
            user_id,
            amount,
            now,
            false,
        ))
    }

    async fn find_payment(
        &self,
        id: PaymentTransactionId,
    ) -> Result<Option<PaymentTransaction>, RepoError> {
        let row: Option<DbPaymentTransaction> = sqlx::query_as(
            r#"SELECT id, user_id, amount, date, deleted FROM payment_transactions
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPaymentTransaction::into_domain).transpose()
    }

    async fn list_payments(
        &self,
        page: PageRequest,
    ) -> Result<Page<PaymentTransaction>, RepoError> {
        let total = self.count_active("payment_transactions").await?;

        let rows: Vec<DbPaymentTransaction> = sqlx::query_as(
            r#"SELECT id, user_id, amount, date, deleted FROM payment_transactions
               WHERE deleted = 0 ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbPaymentTransaction::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn list_payments_for_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<PaymentTransaction>, RepoError> {
        let count: DbCount = sqlx::query_as(
            r#"SELECT COUNT(*) AS n FROM payment_transactions
               WHERE user_id = ? AND deleted = 0"#,
        )
        .bind(user_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let rows: Vec<DbPaymentTransaction> = sqlx::query_as(
            r#"SELECT id, user_id, amount, date, deleted FROM payment_transactions
               WHERE user_id = ? AND deleted = 0 ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(user_id.as_i64())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbPaymentTransaction::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, count.n as u64))
    }

    async fn trash_payment(&self, id: PaymentTransactionId) -> Result<bool, RepoError> {
        self.trash_row("payment_transactions", id.as_i64()).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions (purchases)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionRepository for SqliteRepo {
    async fn create_transaction(
        &self,
        user_id: UserId,
        total: Money,
        items: &[NewTransactionItem],
    ) -> Result<Transaction, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let now = Utc::now();

        let header = sqlx::query(
            r#"INSERT INTO transactions (user_id, total_amount, date) VALUES (?, ?, ?)"#,
        )
        .bind(user_id.as_i64())
        .bind(total.minor())
        .bind(now.to_rfc3339())
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let tx_id = header.last_insert_rowid();

        for item in items {
            let stock: Option<DbStock> =
                sqlx::query_as(r#"SELECT count FROM products WHERE id = ? AND deleted = 0"#)
                    .bind(item.product_id.as_i64())
                    .fetch_optional(&mut *db_tx)
                    .await
                    .map_err(|e| RepoError::Database(e.to_string()))?;

            // Early returns roll the whole unit back; no partial rows survive.
            let stock = stock.ok_or(RepoError::Domain(DomainError::ProductNotFound))?;

            if stock.count < item.count {
                return Err(RepoError::Domain(DomainError::NotEnoughProduct {
                    available: stock.count,
                    requested: item.count,
                }));
            }

            let line_total = item.line_total().map_err(RepoError::Domain)?;

            sqlx::query(
                r#"INSERT INTO transaction_items (transaction_id, product_id, count, amount, total_amount)
                   VALUES (?, ?, ?, ?, ?)"#,
            )
            .bind(tx_id)
            .bind(item.product_id.as_i64())
            .bind(item.count)
            .bind(item.amount.minor())
            .bind(line_total.minor())
            .execute(&mut *db_tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

            sqlx::query(r#"UPDATE products SET count = count - ? WHERE id = ?"#)
                .bind(item.count)
                .bind(item.product_id.as_i64())
                .execute(&mut *db_tx)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;
        }

        let debited = sqlx::query(
            r#"UPDATE users SET balance = balance - ? WHERE id = ? AND deleted = 0"#,
        )
        .bind(total.minor())
        .bind(user_id.as_i64())
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if debited.rows_affected() == 0 {
            return Err(RepoError::Domain(DomainError::UserNotFound));
        }

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(Transaction::from_parts(
            TransactionId::from_i64(tx_id),
            user_id,
            total,
            now,
            false,
        ))
    }

    async fn find_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError> {
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"SELECT id, user_id, total_amount, date, deleted FROM transactions
               WHERE id = ? AND deleted = 0"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbTransaction::into_domain).transpose()
    }

    async fn list_transactions(&self, page: PageRequest) -> Result<Page<Transaction>, RepoError> {
        let total = self.count_active("transactions").await?;

        let rows: Vec<DbTransaction> = sqlx::query_as(
            r#"SELECT id, user_id, total_amount, date, deleted FROM transactions
               WHERE deleted = 0 ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbTransaction::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn trash_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
        self.trash_row("transactions", id.as_i64()).await
    }

    async fn find_user_purchases(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<PurchaseRecord>, RepoError> {
        let count: DbCount = sqlx::query_as(
            r#"SELECT COUNT(*) AS n
               FROM transaction_items ti
               JOIN transactions t ON ti.transaction_id = t.id
               WHERE t.user_id = ? AND ti.deleted = 0 AND t.deleted = 0"#,
        )
        .bind(user_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let rows: Vec<DbPurchaseRecord> = sqlx::query_as(
            r#"SELECT
                   u.user_name AS user_name,
                   p.name AS product_name,
                   ti.count AS count,
                   ti.amount AS amount,
                   ti.total_amount AS total_amount
               FROM transaction_items ti
               JOIN transactions t ON ti.transaction_id = t.id
               JOIN products p ON ti.product_id = p.id
               JOIN users u ON t.user_id = u.id
               WHERE t.user_id = ? AND ti.deleted = 0 AND t.deleted = 0
               ORDER BY ti.id
               LIMIT ? OFFSET ?"#,
        )
        .bind(user_id.as_i64())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbPurchaseRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, count.n as u64))
    }

    async fn find_transaction_purchases(
        &self,
        transaction_id: TransactionId,
        page: PageRequest,
    ) -> Result<Page<PurchaseRecord>, RepoError> {
        let count: DbCount = sqlx::query_as(
            r#"SELECT COUNT(*) AS n
               FROM transaction_items ti
               JOIN transactions t ON ti.transaction_id = t.id
               WHERE t.id = ? AND ti.deleted = 0 AND t.deleted = 0"#,
        )
        .bind(transaction_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let rows: Vec<DbPurchaseRecord> = sqlx::query_as(
            r#"SELECT
                   u.user_name AS user_name,
                   p.name AS product_name,
                   ti.count AS count,
                   ti.amount AS amount,
                   ti.total_amount AS total_amount
               FROM transaction_items ti
               JOIN transactions t ON ti.transaction_id = t.id
               JOIN products p ON ti.product_id = p.id
               JOIN users u ON t.user_id = u.id
               WHERE t.id = ? AND ti.deleted = 0 AND t.deleted = 0
               ORDER BY ti.id
               LIMIT ? OFFSET ?"#,
        )
        .bind(transaction_id.as_i64())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbPurchaseRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, count.n as u64))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction items
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionItemRepository for SqliteRepo {
    async fn find_transaction_item(
        &self,
        id: TransactionItemId,
    ) -> Result<Option<TransactionItem>, RepoError> {
        let row: Option<DbTransactionItem> = sqlx::query_as(
            r#"SELECT id, transaction_id, product_id, count, amount, total_amount, deleted
               FROM transaction_items WHERE id = ? AND deleted = 0"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbTransactionItem::into_domain).transpose()
    }

    async fn list_transaction_items(
        &self,
        page: PageRequest,
    ) -> Result<Page<TransactionItem>, RepoError> {
        let total = self.count_active("transaction_items").await?;

        let rows: Vec<DbTransactionItem> = sqlx::query_as(
            r#"SELECT id, transaction_id, product_id, count, amount, total_amount, deleted
               FROM transaction_items WHERE deleted = 0 ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        let items = rows
            .into_iter()
            .map(DbTransactionItem::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn trash_transaction_item(&self, id: TransactionItemId) -> Result<bool, RepoError> {
        self.trash_row("transaction_items", id.as_i64()).await
    }
}
