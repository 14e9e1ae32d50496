//! Room Service - hotel in-room food & beverage ordering backend
//!
//! # Architecture
//!
//! - **Database** (`db`): SQLite through sqlx, explicit query functions per table
//! - **Auth** (`auth`): JWT + Argon2; room sessions and admin sessions
//! - **Services** (`services`): order lifecycle, catalog, room administration
//! - **HTTP API** (`api`): axum routers and handlers per resource
//!
//! # Module layout
//!
//! ```text
//! room-service/src/
//! ├── core/          # config, state, server
//! ├── auth/          # jwt, password, cookies, principals, guards
//! ├── services/      # domain services
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logger, validation, result alias
//! └── db/            # pool, seed data, repositories
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentAdmin, CurrentRoom, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger;

// Security logging macro - accepts tracing field expressions
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` into the process environment before `Config::from_env`
pub fn setup_environment() {
    let _ = dotenvy::dotenv();
}
