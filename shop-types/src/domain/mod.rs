//! Domain models for the shop transaction service.

/// Declares a store-assigned numeric entity id.
///
/// Identity is handed out by the database on insert and never changes
/// afterwards, so the only constructors are `from_i64` (reconstruction)
/// and `FromStr` (path parameters).
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an id from a raw store-assigned value.
            pub fn from_i64(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw numeric value.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

pub(crate) use entity_id;

pub mod category;
pub mod money;
pub mod payment;
pub mod product;
pub mod transaction;
pub mod user;

pub use category::{Category, CategoryId};
pub use money::Money;
pub use payment::{PaymentTransaction, PaymentTransactionId};
pub use product::{Product, ProductId};
pub use transaction::{
    NewTransactionItem, PurchaseRecord, Transaction, TransactionId, TransactionItem,
    TransactionItemId,
};
pub use user::{User, UserId, UserRole};
