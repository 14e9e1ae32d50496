//! Bootstrap data
//!
//! Idempotent: rows that already exist (by admin username, room number or
//! category name) are left untouched, so the seed runs on every startup.

use shared::models::RoomCreate;
use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::core::{Config, ServerError};
use crate::db::repository::{RepoError, admin_user, category, room};

/// What a seed run inserted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub admins: usize,
    pub rooms: usize,
    pub categories: usize,
}

pub async fn run(pool: &SqlitePool, config: &Config) -> Result<SeedReport, ServerError> {
    let report = seed(pool, config)
        .await
        .map_err(|e| ServerError::Seed(e.to_string()))?;
    tracing::info!(
        admins = report.admins,
        rooms = report.rooms,
        categories = report.categories,
        "Seed data applied"
    );
    Ok(report)
}

async fn seed(pool: &SqlitePool, config: &Config) -> Result<SeedReport, RepoError> {
    let mut report = SeedReport::default();

    if let Some(admin) = &config.admin
        && admin_user::find_by_username(pool, &admin.username)
            .await?
            .is_none()
    {
        let hash = hash_password(&admin.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash admin password: {e}")))?;
        admin_user::create(pool, &admin.username, &admin.email, None, &hash, true).await?;
        tracing::info!(username = %admin.username, "Bootstrap admin created");
        report.admins += 1;
    }

    for demo in &config.demo_rooms {
        if room::find_by_number(pool, &demo.number).await?.is_some() {
            continue;
        }
        room::create(
            pool,
            RoomCreate {
                number: demo.number.clone(),
                surname: demo.surname.clone(),
                phone: None,
                check_in: None,
                check_out: None,
            },
        )
        .await?;
        report.rooms += 1;
    }

    for (index, name) in config.initial_categories.iter().enumerate() {
        if category::find_by_name(pool, name).await?.is_some() {
            continue;
        }
        category::create(pool, name, None, index as i64 + 1).await?;
        report.categories += 1;
    }

    Ok(report)
}
