//! Estadísticas de consumo derivadas de los repostajes de un vehículo

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelStats {
    pub total_fuel_liters: f64,
    pub total_cost: f64,
    pub average_consumption_per_100_km: f64,
}
