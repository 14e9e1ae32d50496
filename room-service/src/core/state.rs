//! Server state shared by every handler

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::{DbService, seed};

/// Server state
///
/// Cheap to clone: the pool is reference counted and the rest sits behind `Arc`.
/// - `config`: immutable configuration built once at startup
/// - `pool`: the SQLite connection pool
/// - `jwt_service`: token issue/verify with the startup key
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Assemble state from an already migrated pool
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config: Arc::new(config),
            pool,
            jwt_service,
        }
    }

    /// Open the database, apply migrations and seed bootstrap data
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url).await?;
        seed::run(&db.pool, config).await?;
        Ok(Self::new(config.clone(), db.pool))
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
