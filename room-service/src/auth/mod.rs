//! Authentication and authorization
//!
//! - [`JwtService`] - token issue/verify
//! - [`password`] - Argon2 hashing
//! - [`cookie`] - session cookie parsing and building
//! - [`CurrentRoom`] / [`CurrentAdmin`] - typed principals
//! - [`require_admin`] - admin guard middleware

pub mod cookie;
pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use extractor::{CurrentAdmin, CurrentRoom};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService, UserType};
pub use middleware::{require_admin, require_admin_cookie, require_room_cookie};
