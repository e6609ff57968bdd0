//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo y los metadatos del
//! propietario tal como los guarda el registro en memoria.

use serde::{Deserialize, Serialize};

/// Vehículo registrado. `owner` y `registration_height` no cambian nunca;
/// `active` solo lo cambia el propietario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub owner: String,
    pub model: String,
    pub capacity: u32,
    pub registration_height: u64,
    pub active: bool,
}

/// Metadatos del propietario
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleOwner {
    pub vehicle_count: u64,
}

/// Valores ambientales de una llamada: quién la hace y a qué altura de bloque
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub sender: String,
    pub block_height: u64,
}

impl CallContext {
    pub fn new(sender: impl Into<String>, block_height: u64) -> Self {
        Self {
            sender: sender.into(),
            block_height,
        }
    }
}
