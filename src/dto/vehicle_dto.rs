use crate::models::vehicle::Vehicle;
use crate::utils::errors::ErrorResponse;
use serde::{Deserialize, Serialize};

// Request para registrar un vehículo
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterVehicleRequest {
    pub vehicle_id: String,
    pub model: String,
    pub capacity: u32,
}

// Request para activar/desactivar un vehículo
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub vehicle_id: String,
    pub active: bool,
}

// Response de vehículo
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VehicleDetailsResponse {
    pub vehicle_id: String,
    pub owner: String,
    pub model: String,
    pub capacity: u32,
    pub registration_height: u64,
    pub active: bool,
}

impl VehicleDetailsResponse {
    pub fn from_vehicle(vehicle_id: impl Into<String>, vehicle: Vehicle) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            owner: vehicle.owner,
            model: vehicle.model,
            capacity: vehicle.capacity,
            registration_height: vehicle.registration_height,
            active: vehicle.active,
        }
    }
}

// Resumen de un propietario
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OwnerSummaryResponse {
    pub owner: String,
    pub vehicle_count: u64,
}

/// Comando del host, una línea JSON por comando
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RegistryCommand {
    RegisterVehicle(RegisterVehicleRequest),
    UpdateVehicleStatus(UpdateVehicleStatusRequest),
    GetVehicleDetails { vehicle_id: String },
    IsVehicleActive { vehicle_id: String },
    GetOwnerSummary { owner: String },
    ListOwnerVehicles { owner: String },
}

impl RegistryCommand {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            RegistryCommand::RegisterVehicle(_) | RegistryCommand::UpdateVehicleStatus(_)
        )
    }
}

/// Línea de entrada: el comando más el sender opcional
#[derive(Debug, Clone, Deserialize)]
pub struct CommandEnvelope {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(flatten)]
    pub command: RegistryCommand,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ErrorResponse) -> Self {
        Self {
            success: false,
            message: Some(error.message.clone()),
            data: None,
            error: Some(error),
        }
    }
}
