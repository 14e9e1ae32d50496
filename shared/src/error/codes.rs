//! Unified error codes for the room service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors (products, categories)
//! - 7xxx: Room errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its u16 value so clients can branch on it without parsing
/// the human-readable `detail` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Date range is malformed or inverted
    InvalidDateRange = 6,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (room/surname or username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 4xxx: Order ====================
    /// Order not found (or not owned by the caller)
    OrderNotFound = 4001,
    /// No pending orders to confirm
    NoPendingOrders = 4004,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price must be positive
    ProductInvalidPrice = 6003,
    /// Product could not be persisted
    ProductCreateFailed = 6004,
    /// Category not found
    CategoryNotFound = 6101,
    /// Category has no products
    CategoryEmpty = 6102,

    // ==================== 7xxx: Room ====================
    /// Room number already registered
    RoomNumberExists = 7002,
    /// Room number is not alphanumeric or has the wrong length
    RoomNumberInvalid = 7003,
    /// Phone number is malformed
    PhoneInvalid = 7004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default guest-facing message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operación exitosa",
            ErrorCode::Unknown => "Error desconocido",
            ErrorCode::ValidationFailed => "Datos inválidos",
            ErrorCode::NotFound => "Recurso no encontrado",
            ErrorCode::AlreadyExists => "El recurso ya existe",
            ErrorCode::InvalidRequest => "Solicitud inválida",
            ErrorCode::InvalidDateRange => "Rango de fechas inválido",

            // Auth
            ErrorCode::NotAuthenticated => "No autenticado",
            ErrorCode::InvalidCredentials => "Credenciales inválidas",
            ErrorCode::TokenExpired => "Token inválido o expirado",
            ErrorCode::TokenInvalid => "Token inválido o expirado",
            ErrorCode::AccountDisabled => "Usuario no encontrado o inactivo",

            // Order
            ErrorCode::OrderNotFound => "Pedido no encontrado",
            ErrorCode::NoPendingOrders => "No hay pedidos pendientes para confirmar",

            // Catalog
            ErrorCode::ProductNotFound => "Producto no encontrado",
            ErrorCode::ProductInvalidPrice => "El precio debe ser mayor que cero",
            ErrorCode::ProductCreateFailed => "Error al crear el producto",
            ErrorCode::CategoryNotFound => "Categoría no encontrada",
            ErrorCode::CategoryEmpty => "No hay productos en esta categoría",

            // Room
            ErrorCode::RoomNumberExists => "El número de habitación ya existe",
            ErrorCode::RoomNumberInvalid => "Número de habitación inválido",
            ErrorCode::PhoneInvalid => "Número de teléfono inválido",

            // System
            ErrorCode::InternalError => "Error interno del servidor",
            ErrorCode::DatabaseError => "Error de base de datos",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidDateRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4004 => Ok(ErrorCode::NoPendingOrders),

            // Catalog
            6001 => Ok(ErrorCode::ProductNotFound),
            6003 => Ok(ErrorCode::ProductInvalidPrice),
            6004 => Ok(ErrorCode::ProductCreateFailed),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6102 => Ok(ErrorCode::CategoryEmpty),

            // Room
            7002 => Ok(ErrorCode::RoomNumberExists),
            7003 => Ok(ErrorCode::RoomNumberInvalid),
            7004 => Ok(ErrorCode::PhoneInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
