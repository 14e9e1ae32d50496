//! Data models
//!
//! Shared between room-service and its frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Rust field names are English; serde renames give the Spanish wire names.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod admin_user;
pub mod category;
pub mod order;
pub mod product;
pub mod room;

// Re-exports
pub use admin_user::*;
pub use category::*;
pub use order::*;
pub use product::*;
pub use room::*;
