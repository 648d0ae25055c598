//! Modelo de Vehicle
//!
//! Registro inmutable de un vehículo. Solo se crea a través del
//! `VehicleRepository`, que le asigna su identificador.

use serde::{Deserialize, Serialize};

/// Identificador de vehículo: entero positivo, monótono y nunca reutilizado
pub type VehicleId = u64;

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl Vehicle {
    pub fn new(id: VehicleId, brand: String, model: String, year: i32) -> Self {
        Self { id, brand, model, year }
    }
}
