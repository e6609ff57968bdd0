//! Repositorios del sistema
//!
//! Almacenamiento en memoria de vehículos y propietarios.

pub mod vehicle_registry;

pub use vehicle_registry::VehicleRegistry;
