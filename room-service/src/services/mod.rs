//! Domain services
//!
//! Plain async functions over the pool. Principals arrive already resolved
//! from the auth layer.

pub mod catalog;
pub mod order;
pub mod room;
