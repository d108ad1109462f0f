//! User domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity_id;
use super::money::Money;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a User.
    UserId
}

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Returns the storage representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer account holding a spending balance.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub full_name: String,
    /// Login name, unique among active users
    pub user_name: String,
    /// Role (new accounts start as `USER`)
    pub role: UserRole,
    /// Available spending credit
    pub balance: Money,
    /// Soft-delete marker
    pub deleted: bool,
}

impl User {
    /// Reconstructs a user from database fields.
    pub fn from_parts(
        id: UserId,
        full_name: String,
        user_name: String,
        role: UserRole,
        balance: Money,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            full_name,
            user_name,
            role,
            balance,
            deleted,
        }
    }

    /// Credits (adds) money to the balance.
    pub fn credit(&mut self, amount: Money) -> Result<(), DomainError> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    /// Debits (subtracts) money from the balance.
    pub fn debit(&mut self, amount: Money) -> Result<(), DomainError> {
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    /// Checks whether the balance covers a purchase total.
    pub fn has_sufficient_balance(&self, total: Money) -> bool {
        self.balance >= total
    }
}
