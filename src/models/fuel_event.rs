//! Modelo de FuelEvent
//!
//! Un repostaje asociado a exactamente un vehículo. El `price` es el
//! coste total del repostaje, no el precio por litro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEvent {
    pub liters: f64,
    pub price: f64,
    /// Distancia acumulada del vehículo en el momento del repostaje
    pub odometer_reading: f64,
    pub timestamp: DateTime<Utc>,
}

impl FuelEvent {
    pub fn new(liters: f64, price: f64, odometer_reading: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            liters,
            price,
            odometer_reading,
            timestamp,
        }
    }
}
