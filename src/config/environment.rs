//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del host de comandos.

use crate::utils::errors::{AppError, AppResult};
use std::env;
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub log_level: Level,
    pub initial_block_height: u64,
    pub default_sender: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: Level::INFO,
            initial_block_height: 0,
            default_sender: None,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno (llamar después de `dotenv()`)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.trim().parse::<Level>().map_err(|_| {
                AppError::Config(format!("LOG_LEVEL '{}' is not a valid level", raw))
            })?,
            None => defaults.log_level,
        };

        let initial_block_height = match lookup("INITIAL_BLOCK_HEIGHT") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("INITIAL_BLOCK_HEIGHT '{}' must be a valid number", raw))
            })?,
            None => defaults.initial_block_height,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level,
            initial_block_height,
            default_sender: lookup("DEFAULT_SENDER")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.initial_block_height, 0);
        assert!(config.default_sender.is_none());
    }

    #[test]
    fn test_reads_values() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("LOG_LEVEL", "debug"),
            ("INITIAL_BLOCK_HEIGHT", "100"),
            ("DEFAULT_SENDER", "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.initial_block_height, 100);
        assert_eq!(
            config.default_sender.as_deref(),
            Some("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
        );
    }

    #[test]
    fn test_invalid_height_is_config_error() {
        let result =
            EnvironmentConfig::from_lookup(lookup_from(&[("INITIAL_BLOCK_HEIGHT", "cien")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_log_level_is_config_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "verbose")]));
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("LOG_LEVEL 'verbose'")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_sender_is_ignored() {
        let config =
            EnvironmentConfig::from_lookup(lookup_from(&[("DEFAULT_SENDER", "  ")])).unwrap();
        assert!(config.default_sender.is_none());
    }
}
