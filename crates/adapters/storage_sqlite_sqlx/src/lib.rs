//! # assethub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `assethub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `assethub-app` (for port traits) and `assethub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod asset_repo;
mod error;
mod pool;

pub use asset_repo::SqliteAssetRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
