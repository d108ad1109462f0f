//! Database row structs and domain conversions.
//!
//! SQLite has no native datetime or boolean types, so timestamps are
//! RFC 3339 text and flags are integers; conversion to domain types
//! happens in one place here.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use shop_types::{
    Category, CategoryId, Money, PaymentTransaction, PaymentTransactionId, Product, ProductId,
    PurchaseRecord, RepoError, Transaction, TransactionId, TransactionItem, TransactionItemId,
    User, UserId, UserRole,
};

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_role(s: &str) -> Result<UserRole, RepoError> {
    match s {
        "USER" => Ok(UserRole::User),
        "ADMIN" => Ok(UserRole::Admin),
        _ => Err(RepoError::Database(format!("Unknown user role: {}", s))),
    }
}

pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::Database(e.to_string()))
}

fn parse_money(minor: i64) -> Result<Money, RepoError> {
    Money::new(minor).map_err(RepoError::Domain)
}

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// User row from database.
#[derive(FromRow)]
pub struct DbUser {
    pub id: i64,
    pub full_name: String,
    pub user_name: String,
    pub role: String,
    pub balance: i64,
    pub deleted: i64,
}

impl DbUser {
    pub fn into_domain(self) -> Result<User, RepoError> {
        Ok(User::from_parts(
            UserId::from_i64(self.id),
            self.full_name,
            self.user_name,
            parse_role(&self.role)?,
            parse_money(self.balance)?,
            self.deleted != 0,
        ))
    }
}

/// Category row from database.
#[derive(FromRow)]
pub struct DbCategory {
    pub id: i64,
    pub name: String,
    pub sort_order: i64,
    pub description: String,
    pub deleted: i64,
}

impl DbCategory {
    pub fn into_domain(self) -> Result<Category, RepoError> {
        Ok(Category::from_parts(
            CategoryId::from_i64(self.id),
            self.name,
            self.sort_order,
            self.description,
            self.deleted != 0,
        ))
    }
}

/// Product row from database.
#[derive(FromRow)]
pub struct DbProduct {
    pub id: i64,
    pub name: String,
    pub count: i64,
    pub category_id: i64,
    pub deleted: i64,
}

impl DbProduct {
    pub fn into_domain(self) -> Result<Product, RepoError> {
        Ok(Product::from_parts(
            ProductId::from_i64(self.id),
            self.name,
            self.count,
            CategoryId::from_i64(self.category_id),
            self.deleted != 0,
        ))
    }
}

/// Transaction row from database.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: i64,
    pub date: String,
    pub deleted: i64,
}

impl DbTransaction {
    pub fn into_domain(self) -> Result<Transaction, RepoError> {
        Ok(Transaction::from_parts(
            TransactionId::from_i64(self.id),
            UserId::from_i64(self.user_id),
            parse_money(self.total_amount)?,
            parse_datetime(&self.date)?,
            self.deleted != 0,
        ))
    }
}

/// Transaction item row from database.
#[derive(FromRow)]
pub struct DbTransactionItem {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    pub count: i64,
    pub amount: i64,
    pub total_amount: i64,
    pub deleted: i64,
}

impl DbTransactionItem {
    pub fn into_domain(self) -> Result<TransactionItem, RepoError> {
        Ok(TransactionItem::from_parts(
            TransactionItemId::from_i64(self.id),
            TransactionId::from_i64(self.transaction_id),
            ProductId::from_i64(self.product_id),
            self.count,
            parse_money(self.amount)?,
            parse_money(self.total_amount)?,
            self.deleted != 0,
        ))
    }
}

/// Payment transaction row from database.
#[derive(FromRow)]
pub struct DbPaymentTransaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub date: String,
    pub deleted: i64,
}

impl DbPaymentTransaction {
    pub fn into_domain(self) -> Result<PaymentTransaction, RepoError> {
        Ok(PaymentTransaction::from_parts(
            PaymentTransactionId::from_i64(self.id),
            UserId::from_i64(self.user_id),
            parse_money(self.amount)?,
            parse_datetime(&self.date)?,
            self.deleted != 0,
        ))
    }
}

/// Joined purchase-projection row.
#[derive(FromRow)]
pub struct DbPurchaseRecord {
    pub user_name: String,
    pub product_name: String,
    pub count: i64,
    pub amount: i64,
    pub total_amount: i64,
}

impl DbPurchaseRecord {
    pub fn into_domain(self) -> Result<PurchaseRecord, RepoError> {
        Ok(PurchaseRecord {
            user_name: self.user_name,
            product_name: self.product_name,
            count: self.count,
            amount: parse_money(self.amount)?,
            total_amount: parse_money(self.total_amount)?,
        })
    }
}

/// Count-only row for paged queries.
#[derive(FromRow)]
pub struct DbCount {
    pub n: i64,
}

/// Stock-only row for purchase writes.
#[derive(FromRow)]
pub struct DbStock {
    pub count: i64,
}
