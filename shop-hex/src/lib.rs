//! # Shop Hex
//!
//! Application service layer and HTTP adapter for the shop transaction
//! service.
//!
//! ## Architecture
//!
//! - `service/` - Application services (one per entity group)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - Generated API documentation
//!
//! Every service is generic over the repository port traits it needs,
//! so different adapters (SQLite, in-memory for tests) can be injected
//! at compile time.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{
    CategoryService, PaymentService, ProductService, TransactionItemService, TransactionService,
    UserService,
};
