use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Vehicle, VehicleId};

// Request para crear un vehículo. Marca y modelo ausentes llegan como
// `None` y los rechaza el servicio; un año ausente vale 0 y no pasa el rango.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(range(min = 1886, message = "year must be a valid positive year"))]
    #[serde(default)]
    pub year: i32,
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_before_first_automobile_is_rejected() {
        let request: CreateVehicleRequest =
            serde_json::from_str(r#"{"brand":"Benz","model":"Patent-Motorwagen","year":1885}"#).unwrap();
        assert!(request.validate().is_err());

        let request: CreateVehicleRequest =
            serde_json::from_str(r#"{"brand":"Benz","model":"Patent-Motorwagen","year":1886}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: CreateVehicleRequest =
            serde_json::from_str(r#"{"year":2020}"#).unwrap();
        assert!(request.brand.is_none());
        assert!(request.model.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_year_fails_range_check() {
        let request: CreateVehicleRequest =
            serde_json::from_str(r#"{"brand":"Toyota","model":"Corolla"}"#).unwrap();
        assert_eq!(request.year, 0);
        assert!(request.validate().is_err());
    }
}
