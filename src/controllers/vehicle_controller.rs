use std::sync::Arc;
use validator::Validate;

use crate::dto::fuel_dto::{FuelEventRequest, FuelEventResponse, FuelStatsResponse};
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::models::VehicleId;
use crate::services::FuelTrackingService;
use crate::utils::errors::AppError;

pub struct VehicleController {
    service: Arc<FuelTrackingService>,
}

impl VehicleController {
    pub fn new(service: Arc<FuelTrackingService>) -> Self {
        Self { service }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let vehicle = self
            .service
            .create_vehicle(
                request.brand.as_deref(),
                request.model.as_deref(),
                request.year,
            )
            .await?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Vec<VehicleResponse> {
        self.service
            .list_vehicles()
            .await
            .into_iter()
            .map(VehicleResponse::from)
            .collect()
    }

    pub async fn find(&self, vehicle_id: VehicleId) -> Result<VehicleResponse, AppError> {
        Ok(self.service.find_vehicle(vehicle_id).await?.into())
    }

    pub async fn add_fuel(
        &self,
        vehicle_id: VehicleId,
        request: FuelEventRequest,
    ) -> Result<FuelEventResponse, AppError> {
        let event = self
            .service
            .record_fuel_event(vehicle_id, request.liters, request.price, request.odometer)
            .await?;

        Ok(event.into())
    }

    pub async fn fuel_stats(&self, vehicle_id: VehicleId) -> Result<FuelStatsResponse, AppError> {
        let stats = self.service.compute_fuel_stats(vehicle_id).await?;
        Ok(stats.into())
    }
}
