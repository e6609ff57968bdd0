//! Registro de vehículos
//!
//! Registro en memoria donde cada propietario registra vehículos, los
//! consulta y los activa o desactiva.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod state;
pub mod utils;
