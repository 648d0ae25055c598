use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FuelEvent, FuelStats};

// Request para registrar un repostaje
#[derive(Debug, Default, Deserialize)]
pub struct FuelEventRequest {
    pub liters: Option<f64>,
    pub price: Option<f64>,
    pub odometer: Option<f64>,
}

// Response de repostaje
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEventResponse {
    pub liters: f64,
    pub price: f64,
    pub odometer: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<FuelEvent> for FuelEventResponse {
    fn from(event: FuelEvent) -> Self {
        Self {
            liters: event.liters,
            price: event.price,
            odometer: event.odometer_reading,
            timestamp: event.timestamp,
        }
    }
}

// Response de estadísticas de consumo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStatsResponse {
    pub total_fuel_liters: f64,
    pub total_cost: f64,
    #[serde(rename = "averageConsumptionPer100Km")]
    pub average_consumption_per_100_km: f64,
}

impl From<FuelStats> for FuelStatsResponse {
    fn from(stats: FuelStats) -> Self {
        Self {
            total_fuel_liters: stats.total_fuel_liters,
            total_cost: stats.total_cost,
            average_consumption_per_100_km: stats.average_consumption_per_100_km,
        }
    }
}

// Query del endpoint secundario de estadísticas
#[derive(Debug, Default, Deserialize)]
pub struct FuelStatsQuery {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_field_names() {
        let response = FuelStatsResponse::from(FuelStats {
            total_fuel_liters: 75.0,
            total_cost: 115.0,
            average_consumption_per_100_km: 15.0,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalFuelLiters"], 75.0);
        assert_eq!(json["totalCost"], 115.0);
        assert_eq!(json["averageConsumptionPer100Km"], 15.0);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let request: FuelEventRequest =
            serde_json::from_str(r#"{"liters":40.0,"price":null}"#).unwrap();
        assert_eq!(request.liters, Some(40.0));
        assert!(request.price.is_none());
        assert!(request.odometer.is_none());
    }
}
