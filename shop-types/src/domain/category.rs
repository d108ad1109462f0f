//! Category domain model.

use super::entity_id;

entity_id! {
    /// Unique identifier for a Category.
    CategoryId
}

/// A product category; listings sort ascending by `sort_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub sort_order: i64,
    pub description: String,
    pub deleted: bool,
}

impl Category {
    /// Reconstructs a category from database fields.
    pub fn from_parts(
        id: CategoryId,
        name: String,
        sort_order: i64,
        description: String,
        deleted: bool,
    ) -> Self {
        Self {
            id,
            name,
            sort_order,
            description,
            deleted,
        }
    }
}
