//! # Shop Repository
//!
//! Concrete repository implementation (adapter) for the shop
//! transaction service. This crate provides the SQLite adapter that
//! implements the persistence port traits.

pub mod sqlite;

mod types;


pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// This function:
/// 1. Connects to the database
/// 2. Runs the migration to create tables
/// 3. Returns a ready-to-use repository
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://shop.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    SqliteRepo::new(database_url).await
}
