use crate::dto::vehicle_dto::{
    ApiResponse, CommandEnvelope, OwnerSummaryResponse, RegisterVehicleRequest, RegistryCommand,
    UpdateVehicleStatusRequest, VehicleDetailsResponse,
};
use crate::models::vehicle::CallContext;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

pub struct VehicleController {
    state: AppState,
}

impl VehicleController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn register_vehicle(
        &self,
        ctx: &CallContext,
        request: RegisterVehicleRequest,
    ) -> AppResult<ApiResponse<bool>> {
        let mut registry = self.state.registry.write().await;

        match registry.register(
            &request.vehicle_id,
            &request.model,
            request.capacity,
            &ctx.sender,
            ctx.block_height,
        ) {
            Ok(()) => {
                info!(
                    "🚗 Vehículo '{}' registrado por '{}' en bloque {}",
                    request.vehicle_id, ctx.sender, ctx.block_height
                );
                Ok(ApiResponse::success_with_message(
                    true,
                    "Vehículo registrado exitosamente".to_string(),
                ))
            }
            Err(e) => {
                warn!("❌ Registro rechazado [{}]: {}", e.error_code(), e);
                Err(e.into())
            }
        }
    }

    pub async fn update_vehicle_status(
        &self,
        ctx: &CallContext,
        request: UpdateVehicleStatusRequest,
    ) -> AppResult<ApiResponse<bool>> {
        let mut registry = self.state.registry.write().await;

        match registry.update_status(&request.vehicle_id, request.active, &ctx.sender) {
            Ok(()) => {
                info!(
                    "🔄 Vehículo '{}' marcado como {} por '{}'",
                    request.vehicle_id,
                    if request.active { "activo" } else { "inactivo" },
                    ctx.sender
                );
                Ok(ApiResponse::success_with_message(
                    true,
                    "Estado actualizado exitosamente".to_string(),
                ))
            }
            Err(e) => {
                warn!("❌ Actualización rechazada [{}]: {}", e.error_code(), e);
                Err(e.into())
            }
        }
    }

    pub async fn get_vehicle_details(
        &self,
        vehicle_id: &str,
    ) -> ApiResponse<Option<VehicleDetailsResponse>> {
        let registry = self.state.registry.read().await;
        let details = registry
            .get_details(vehicle_id)
            .cloned()
            .map(|vehicle| VehicleDetailsResponse::from_vehicle(vehicle_id, vehicle));

        if details.is_none() {
            debug!("🔍 Vehículo '{}' no encontrado", vehicle_id);
        }
        ApiResponse::success(details)
    }

    pub async fn is_vehicle_active(&self, vehicle_id: &str) -> ApiResponse<bool> {
        let registry = self.state.registry.read().await;
        ApiResponse::success(registry.is_active(vehicle_id))
    }

    pub async fn get_owner_summary(&self, owner: &str) -> ApiResponse<OwnerSummaryResponse> {
        let registry = self.state.registry.read().await;
        ApiResponse::success(OwnerSummaryResponse {
            owner: owner.to_string(),
            vehicle_count: registry.owner_vehicle_count(owner),
        })
    }

    pub async fn list_owner_vehicles(
        &self,
        owner: &str,
    ) -> ApiResponse<Vec<VehicleDetailsResponse>> {
        let registry = self.state.registry.read().await;
        let vehicles = registry
            .find_by_owner(owner)
            .into_iter()
            .map(|(id, vehicle)| VehicleDetailsResponse::from_vehicle(id, vehicle))
            .collect();
        ApiResponse::success(vehicles)
    }

    /// Ejecuta un comando del host y devuelve la respuesta serializada.
    /// Los comandos que mutan estado requieren un sender.
    pub async fn execute(
        &self,
        command: RegistryCommand,
        sender: Option<&str>,
        block_height: u64,
    ) -> Value {
        if command.is_mutating() && sender.is_none() {
            return error_value(&bad_request_error("sender is required for this operation"));
        }
        let ctx = CallContext::new(sender.unwrap_or_default(), block_height);

        let result = match command {
            RegistryCommand::RegisterVehicle(request) => {
                self.register_vehicle(&ctx, request).await.map(to_value)
            }
            RegistryCommand::UpdateVehicleStatus(request) => {
                self.update_vehicle_status(&ctx, request).await.map(to_value)
            }
            RegistryCommand::GetVehicleDetails { vehicle_id } => {
                Ok(to_value(self.get_vehicle_details(&vehicle_id).await))
            }
            RegistryCommand::IsVehicleActive { vehicle_id } => {
                Ok(to_value(self.is_vehicle_active(&vehicle_id).await))
            }
            RegistryCommand::GetOwnerSummary { owner } => {
                Ok(to_value(self.get_owner_summary(&owner).await))
            }
            RegistryCommand::ListOwnerVehicles { owner } => {
                Ok(to_value(self.list_owner_vehicles(&owner).await))
            }
        };

        result.unwrap_or_else(|e| error_value(&e))
    }

    /// Procesa una línea de entrada del host.
    ///
    /// Las líneas en blanco devuelven `None` sin consumir altura. Cualquier
    /// otra línea, válida o no, consume un bloque del reloj.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        // Una transacción por bloque
        let block_height = self.state.clock.advance();

        let response = match serde_json::from_str::<CommandEnvelope>(line) {
            Ok(envelope) => {
                let sender = envelope
                    .sender
                    .as_deref()
                    .or(self.state.config.default_sender.as_deref());
                self.execute(envelope.command, sender, block_height).await
            }
            Err(e) => {
                error!("❌ Comando inválido en bloque {}: {}", block_height, e);
                error_value(&bad_request_error(&format!("invalid command: {}", e)))
            }
        };

        Some(response)
    }
}

fn to_value<T: Serialize>(response: ApiResponse<T>) -> Value {
    serde_json::to_value(response).unwrap_or(Value::Null)
}

/// Respuesta JSON para un error de la aplicación
pub fn error_value(error: &AppError) -> Value {
    to_value(ApiResponse::error(error.to_response()))
}
