//! Transaction (purchase) domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::entity_id;
use super::money::Money;
use super::product::ProductId;
use super::user::UserId;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a Transaction.
    TransactionId
}

entity_id! {
    /// Unique identifier for a TransactionItem.
    TransactionItemId
}

/// A purchase header.
///
/// The total is fixed at creation time as the exact sum of the item
/// line totals and never recomputed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub total_amount: Money,
    pub date: DateTime<Utc>,
    pub deleted: bool,
}

impl Transaction {
    /// Reconstructs a transaction from database fields.
    pub fn from_parts(
        id: TransactionId,
        user_id: UserId,
        total_amount: Money,
        date: DateTime<Utc>,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            total_amount,
            date,
            deleted,
        }
    }
}

/// One purchased line of a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionItem {
    pub id: TransactionItemId,
    pub transaction_id: TransactionId,
    pub product_id: ProductId,
    pub count: i64,
    /// Unit amount at purchase time
    pub amount: Money,
    /// Line total, computed once as `amount x count`
    pub total_amount: Money,
    pub deleted: bool,
}

impl TransactionItem {
    /// Reconstructs a transaction item from database fields.
    pub fn from_parts(
        id: TransactionItemId,
        transaction_id: TransactionId,
        product_id: ProductId,
        count: i64,
        amount: Money,
        total_amount: Money,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            transaction_id,
            product_id,
            count,
            amount,
            total_amount,
            deleted,
        }
    }
}

/// An item requested in a purchase, before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewTransactionItem {
    pub product_id: ProductId,
    pub count: i64,
    pub amount: Money,
}

impl NewTransactionItem {
    /// Computes the line total with exact minor-unit arithmetic.
    pub fn line_total(&self) -> Result<Money, DomainError> {
        self.amount.times(self.count)
    }
}

/// Read-only purchase-history projection joining user, transaction,
/// item, and product. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PurchaseRecord {
    pub user_name: String,
    pub product_name: String,
    pub count: i64,
    pub amount: Money,
    pub total_amount: Money,
}
