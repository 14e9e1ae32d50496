//! Admin User Model

use serde::{Deserialize, Serialize};

/// Staff account with access to the admin surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "nombre")]
    pub display_name: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(rename = "activo")]
    pub is_active: bool,
    #[serde(rename = "es_superadmin")]
    pub is_superadmin: bool,
}

/// Public admin profile returned by `/api/admin/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "nombre")]
    pub display_name: Option<String>,
    #[serde(rename = "es_superadmin")]
    pub is_superadmin: bool,
}

impl From<&AdminUser> for AdminProfile {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            is_superadmin: user.is_superadmin,
        }
    }
}

/// Admin login form fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = AdminUser {
            id: 1,
            username: "admin".into(),
            email: "admin@hotel.local".into(),
            display_name: Some("Recepción".into()),
            password_hash: "$argon2id$v=19$secret".into(),
            is_active: true,
            is_superadmin: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "admin");
        assert_eq!(json["es_superadmin"], true);

        let profile = serde_json::to_value(AdminProfile::from(&user)).unwrap();
        assert_eq!(profile["nombre"], "Recepción");
    }
}
