use crate::models::vehicle::{Vehicle, VehicleOwner};
use crate::utils::errors::{
    already_registered_error, not_found_error, unauthorized_error, RegistryResult,
};
use std::collections::HashMap;
use tracing::debug;

/// Registro en memoria de vehículos y propietarios.
///
/// Todas las operaciones son síncronas. Un host concurrente debe envolver
/// la instancia completa detrás de un único lock (ver `AppState`).
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    vehicles: HashMap<String, Vehicle>,
    owners: HashMap<String, VehicleOwner>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        vehicle_id: &str,
        model: &str,
        capacity: u32,
        sender: &str,
        block_height: u64,
    ) -> RegistryResult<()> {
        // Verificar que el vehículo no exista
        if self.vehicles.contains_key(vehicle_id) {
            return Err(already_registered_error(vehicle_id));
        }

        self.vehicles.insert(
            vehicle_id.to_string(),
            Vehicle {
                owner: sender.to_string(),
                model: model.to_string(),
                capacity,
                registration_height: block_height,
                active: true,
            },
        );

        // Actualizar contador del propietario
        let owner = self.owners.entry(sender.to_string()).or_default();
        owner.vehicle_count += 1;

        debug!(
            "Vehículo '{}' insertado para '{}' (total propietario: {})",
            vehicle_id, sender, owner.vehicle_count
        );
        Ok(())
    }

    pub fn update_status(
        &mut self,
        vehicle_id: &str,
        active: bool,
        sender: &str,
    ) -> RegistryResult<()> {
        let vehicle = self
            .vehicles
            .get_mut(vehicle_id)
            .ok_or_else(|| not_found_error(vehicle_id))?;

        // Verificar que pertenece al sender
        if vehicle.owner != sender {
            return Err(unauthorized_error(vehicle_id, sender));
        }

        vehicle.active = active;
        Ok(())
    }

    pub fn get_details(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.get(vehicle_id)
    }

    /// `false` tanto para vehículos inactivos como desconocidos
    pub fn is_active(&self, vehicle_id: &str) -> bool {
        self.vehicles
            .get(vehicle_id)
            .is_some_and(|vehicle| vehicle.active)
    }

    pub fn owner_details(&self, owner: &str) -> Option<&VehicleOwner> {
        self.owners.get(owner)
    }

    pub fn owner_vehicle_count(&self, owner: &str) -> u64 {
        self.owners.get(owner).map_or(0, |o| o.vehicle_count)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Vehículos de un propietario, ordenados por id
    pub fn find_by_owner(&self, owner: &str) -> Vec<(String, Vehicle)> {
        let mut vehicles: Vec<(String, Vehicle)> = self
            .vehicles
            .iter()
            .filter(|(_, v)| v.owner == owner)
            .map(|(id, v)| (id.clone(), v.clone()))
            .collect();
        vehicles.sort_by(|a, b| a.0.cmp(&b.0));
        vehicles
    }
}
