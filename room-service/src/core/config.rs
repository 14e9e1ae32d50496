//! Server configuration
//!
//! All settings come from environment variables (a `.env` file is loaded
//! first by [`crate::setup_environment`]). The value is built once at
//! startup and handed to [`crate::ServerState`]; nothing reads the
//! environment afterwards.
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | ENVIRONMENT | development | development / staging / production |
//! | HTTP_PORT | 8000 | |
//! | DATABASE_URL | sqlite:hotel.db | `sqlite::memory:` for tests |
//! | SECRET_KEY / JWT_SECRET | dev fallback | required outside development |
//! | JWT_ALGORITHM | HS256 | HS256 / HS384 / HS512 |
//! | ACCESS_TOKEN_EXPIRE_MINUTES | 720 | |
//! | COOKIE_MAX_AGE_SECONDS | 1800 | |
//! | COOKIE_SECURE | false | |
//! | CORS_ORIGINS | http://localhost:3000 | comma separated |
//! | ADMIN_USERNAME / ADMIN_PASSWORD / ADMIN_EMAIL | unset | bootstrap admin |
//! | INITIAL_CATEGORIES | Bebidas,Comidas,Postres,Snacks | |
//! | DEMO_ROOMS | 101:Gomez,102:Perez,103:Lopez | `number:surname` pairs |
//! | STATIC_DIR | static | |
//! | TEMPLATES_DIR | templates | |
//! | LOG_DIR | unset | daily rolling log file |

use std::path::PathBuf;

use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::auth::JwtConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set in {environment} environment")]
    MissingSecret {
        name: &'static str,
        environment: String,
    },

    #[error("{name} must not be empty in {environment} environment")]
    EmptySecret {
        name: &'static str,
        environment: String,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Credentials of the admin account created at startup
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// A demo room seeded at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRoom {
    pub number: String,
    pub surname: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub http_port: u16,
    /// sqlx SQLite connection string
    pub database_url: String,
    pub jwt: JwtConfig,
    pub cookie_max_age_seconds: i64,
    pub cookie_secure: bool,
    pub cors_origins: Vec<String>,
    pub admin: Option<AdminBootstrap>,
    pub initial_categories: Vec<String>,
    pub demo_rooms: Vec<DemoRoom>,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
    /// `RUST_LOG` syntax
    pub log_filter: Option<String>,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Used by tests to build a config without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());

        let secret = lookup("SECRET_KEY").or_else(|| lookup("JWT_SECRET"));
        let secret = require_secret("SECRET_KEY", secret, &environment)?;

        let algorithm = match lookup("JWT_ALGORITHM") {
            Some(raw) => parse_algorithm(&raw)?,
            None => Algorithm::HS256,
        };

        let jwt = JwtConfig {
            secret,
            algorithm,
            expiration_minutes: parse_or("ACCESS_TOKEN_EXPIRE_MINUTES", &lookup, 720)?,
        };

        let admin = match (
            lookup("ADMIN_USERNAME").filter(|s| !s.is_empty()),
            lookup("ADMIN_PASSWORD").filter(|s| !s.is_empty()),
        ) {
            (Some(username), Some(password)) => Some(AdminBootstrap {
                email: lookup("ADMIN_EMAIL")
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| format!("{username}@hotel.local")),
                username,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            http_port: parse_or("HTTP_PORT", &lookup, 8000)?,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:hotel.db".into()),
            jwt,
            cookie_max_age_seconds: parse_or("COOKIE_MAX_AGE_SECONDS", &lookup, 1800)?,
            cookie_secure: parse_or("COOKIE_SECURE", &lookup, false)?,
            cors_origins: split_list(
                &lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:3000".into()),
            ),
            admin,
            initial_categories: split_list(
                &lookup("INITIAL_CATEGORIES")
                    .unwrap_or_else(|| "Bebidas,Comidas,Postres,Snacks".into()),
            ),
            demo_rooms: parse_demo_rooms(
                &lookup("DEMO_ROOMS").unwrap_or_else(|| "101:Gomez,102:Perez,103:Lopez".into()),
            )?,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".into()).into(),
            templates_dir: lookup("TEMPLATES_DIR")
                .unwrap_or_else(|| "templates".into())
                .into(),
            log_filter: lookup("RUST_LOG").filter(|s| !s.is_empty()),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
            environment,
        })
    }
}

/// Require a secret: must be set and non-empty in non-development environments.
fn require_secret(
    name: &'static str,
    value: Option<String>,
    environment: &str,
) -> Result<String, ConfigError> {
    let val = match value {
        Some(v) => v,
        None => {
            if environment != "development" {
                return Err(ConfigError::MissingSecret {
                    name,
                    environment: environment.into(),
                });
            }
            tracing::warn!("{name} not set, using a development-only secret");
            format!("dev-{name}-not-for-production")
        }
    };
    if val.is_empty() && environment != "development" {
        return Err(ConfigError::EmptySecret {
            name,
            environment: environment.into(),
        });
    }
    Ok(val)
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(ConfigError::InvalidValue {
            name: "JWT_ALGORITHM",
            value: raw.into(),
        }),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_demo_rooms(raw: &str) -> Result<Vec<DemoRoom>, ConfigError> {
    split_list(raw)
        .into_iter()
        .map(|entry| match entry.split_once(':') {
            Some((number, surname)) if !number.trim().is_empty() && !surname.trim().is_empty() => {
                Ok(DemoRoom {
                    number: number.trim().into(),
                    surname: surname.trim().into(),
                })
            }
            _ => Err(ConfigError::InvalidValue {
                name: "DEMO_ROOMS",
                value: entry,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, "development");
        assert!(config.log_filter.is_none());
        assert!(config.log_dir.is_none());
        assert_eq!(config.http_port, 8000);
        assert_eq!(config.database_url, "sqlite:hotel.db");
        assert_eq!(config.jwt.algorithm, Algorithm::HS256);
        assert_eq!(config.jwt.expiration_minutes, 720);
        assert_eq!(config.cookie_max_age_seconds, 1800);
        assert!(!config.cookie_secure);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(
            config.initial_categories,
            vec!["Bebidas", "Comidas", "Postres", "Snacks"]
        );
        assert_eq!(config.demo_rooms.len(), 3);
        assert_eq!(
            config.demo_rooms[0],
            DemoRoom {
                number: "101".into(),
                surname: "Gomez".into()
            }
        );
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_secret_required_outside_development() {
        let err = config_from(&[("ENVIRONMENT", "production")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret { .. }));

        let err = config_from(&[("ENVIRONMENT", "staging"), ("SECRET_KEY", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySecret { .. }));

        let config =
            config_from(&[("ENVIRONMENT", "production"), ("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.environment, "production");
        assert_eq!(config.jwt.secret, "s3cret");
    }

    #[test]
    fn test_algorithm_and_numbers() {
        let config = config_from(&[
            ("JWT_ALGORITHM", "hs512"),
            ("ACCESS_TOKEN_EXPIRE_MINUTES", "60"),
            ("HTTP_PORT", "9000"),
            ("COOKIE_SECURE", "true"),
        ])
        .unwrap();
        assert_eq!(config.jwt.algorithm, Algorithm::HS512);
        assert_eq!(config.jwt.expiration_minutes, 60);
        assert_eq!(config.http_port, 9000);
        assert!(config.cookie_secure);

        assert!(config_from(&[("JWT_ALGORITHM", "RS256")]).is_err());
        assert!(config_from(&[("HTTP_PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_admin_bootstrap_and_lists() {
        let config = config_from(&[
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_PASSWORD", "admin123"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("DEMO_ROOMS", ""),
        ])
        .unwrap();
        let admin = config.admin.unwrap();
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.email, "admin@hotel.local");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.demo_rooms.is_empty());

        assert!(config_from(&[("DEMO_ROOMS", "101Gomez")]).is_err());
    }
}
