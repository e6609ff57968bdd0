//! Sistema de manejo de errores
//!
//! Este módulo define los errores del registro de vehículos y su
//! conversión a respuestas serializables para el host de comandos.

use serde_json::json;
use thiserror::Error;

/// Errores del dominio del registro. Son terminales: nunca se reintentan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unauthorized: '{sender}' is not the owner of vehicle '{vehicle_id}'")]
    Unauthorized { vehicle_id: String, sender: String },

    #[error("Vehicle '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Vehicle '{0}' not found")]
    NotFound(String),
}

impl RegistryError {
    /// Código numérico del contrato (1, 2, 3)
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::Unauthorized { .. } => 1,
            RegistryError::AlreadyRegistered(_) => 2,
            RegistryError::NotFound(_) => 3,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::Unauthorized { .. } => "UNAUTHORIZED",
            RegistryError::AlreadyRegistered(_) => "ALREADY_REGISTERED",
            RegistryError::NotFound(_) => "NOT_FOUND",
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Respuesta de error para el host
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub code: String,
}

impl AppError {
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            AppError::Registry(e) => ErrorResponse {
                error: match e {
                    RegistryError::Unauthorized { .. } => "Unauthorized",
                    RegistryError::AlreadyRegistered(_) => "Already Registered",
                    RegistryError::NotFound(_) => "Not Found",
                }
                .to_string(),
                message: e.to_string(),
                details: Some(json!({ "error_code": e.code() })),
                code: e.error_code().to_string(),
            },

            AppError::BadRequest(msg) => ErrorResponse {
                error: "Bad Request".to_string(),
                message: msg.clone(),
                details: None,
                code: "BAD_REQUEST".to_string(),
            },

            AppError::Config(msg) => ErrorResponse {
                error: "Configuration Error".to_string(),
                message: msg.clone(),
                details: None,
                code: "CONFIG_ERROR".to_string(),
            },
        }
    }
}

/// Resultado tipado para operaciones del registro
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Resultado tipado para operaciones de la aplicación
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(vehicle_id: &str) -> RegistryError {
    RegistryError::NotFound(vehicle_id.to_string())
}

/// Función helper para crear errores de conflicto
pub fn already_registered_error(vehicle_id: &str) -> RegistryError {
    RegistryError::AlreadyRegistered(vehicle_id.to_string())
}

/// Función helper para crear errores de propietario incorrecto
pub fn unauthorized_error(vehicle_id: &str, sender: &str) -> RegistryError {
    RegistryError::Unauthorized {
        vehicle_id: vehicle_id.to_string(),
        sender: sender.to_string(),
    }
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
