//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::{Clock, FuelTrackingService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub tracking: Arc<FuelTrackingService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            tracking: Arc::new(FuelTrackingService::new(clock)),
        }
    }
}
