//! Balance top-up (payment transaction) domain model.

use chrono::{DateTime, Utc};

use super::entity_id;
use super::money::Money;
use super::user::UserId;

entity_id! {
    /// Unique identifier for a PaymentTransaction.
    PaymentTransactionId
}

/// One balance top-up recorded for a user.
///
/// Rows are immutable once created - they are a historical record of
/// credits applied to the user's balance.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTransaction {
    pub id: PaymentTransactionId,
    pub user_id: UserId,
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub deleted: bool,
}

impl PaymentTransaction {
    /// Reconstructs a payment transaction from database fields.
    pub fn from_parts(
        id: PaymentTransactionId,
        user_id: UserId,
        amount: Money,
        date: DateTime<Utc>,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            amount,
            date,
            deleted,
        }
    }
}
