//! Shared application state
//!
//! Este módulo define el estado compartido del host: el registro detrás de
//! un único lock, el reloj de altura de bloque y la configuración.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::VehicleRegistry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Reloj lógico monotónico (altura de bloque)
#[derive(Clone, Debug)]
pub struct BlockHeightClock {
    height: Arc<AtomicU64>,
}

impl BlockHeightClock {
    pub fn new(initial_height: u64) -> Self {
        Self {
            height: Arc::new(AtomicU64::new(initial_height)),
        }
    }

    pub fn current(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }

    /// Avanza un bloque y devuelve la nueva altura
    pub fn advance(&self) -> u64 {
        self.height.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub registry: Arc<RwLock<VehicleRegistry>>,
    pub clock: BlockHeightClock,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let clock = BlockHeightClock::new(config.initial_block_height);
        Self {
            config,
            registry: Arc::new(RwLock::new(VehicleRegistry::new())),
            clock,
        }
    }
}
