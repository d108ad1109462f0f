//! Product domain model.

use super::category::CategoryId;
use super::entity_id;
use crate::error::DomainError;

entity_id! {
    /// Unique identifier for a Product.
    ProductId
}

/// A sellable product with a stock count.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Remaining stock; decremented only by a successful purchase.
    pub count: i64,
    pub category_id: CategoryId,
    pub deleted: bool,
}

impl Product {
    /// Reconstructs a product from database fields.
    pub fn from_parts(
        id: ProductId,
        name: String,
        count: i64,
        category_id: CategoryId,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            name,
            count,
            category_id,
            deleted,
        }
    }

    /// Removes purchased stock, failing on a strict shortfall.
    pub fn take_stock(&mut self, requested: i64) -> Result<(), DomainError> {
        if self.count < requested {
            return Err(DomainError::NotEnoughProduct {
                available: self.count,
                requested,
            });
        }
        self.count -= requested;
        Ok(())
    }
}
