//! Exact-decimal monetary value stored in minor units.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::DomainError;

/// Monetary amount in the smallest currency unit (cents) to avoid
/// floating-point precision issues.
///
/// The wire representation is the raw minor-unit integer, so a request
/// may carry a negative value; callers that require a positive amount
/// check against [`Money::ZERO`] before using it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates a new Money value, rejecting negative amounts.
    pub fn new(minor: i64) -> Result<Self, DomainError> {
        if minor < 0 {
            return Err(DomainError::Validation("amount cannot be negative".into()));
        }
        Ok(Self(minor))
    }

    /// Creates a Money value from a raw minor-unit amount.
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Returns true for amounts below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition - fails on overflow.
    pub fn checked_add(self, other: Money) -> Result<Money, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::Validation("amount overflow".into()))
    }

    /// Checked subtraction - fails if the result would be negative.
    pub fn checked_sub(self, other: Money) -> Result<Money, DomainError> {
        if self.0 < other.0 {
            return Err(DomainError::NotEnoughBalance {
                available: self,
                requested: other,
            });
        }
        Ok(Money(self.0 - other.0))
    }

    /// Line-total multiplication: unit amount times a count.
    pub fn times(self, count: i64) -> Result<Money, DomainError> {
        self.0
            .checked_mul(count)
            .map(Money)
            .ok_or_else(|| DomainError::Validation("amount overflow".into()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
