//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por el registro,
//! el controller y el host de comandos.

pub mod errors;
