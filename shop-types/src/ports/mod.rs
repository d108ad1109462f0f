//! Port traits the persistence adapter implements.

pub mod repository;

pub use repository::{
    CategoryRepository, PaymentRepository, ProductRepository, ShopRepository,
    TransactionItemRepository, TransactionRepository, UserRepository,
};
