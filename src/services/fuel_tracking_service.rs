//! Servicio de seguimiento de combustible
//!
//! Único componente con lógica de decisión: valida la entrada, garantiza
//! que un repostaje solo se registra para un vehículo existente y calcula
//! las estadísticas de consumo.

use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{FuelEvent, FuelStats, Vehicle, VehicleId};
use crate::repositories::{FuelEventRepository, VehicleRepository};
use crate::services::clock::{Clock, SystemClock};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{
    validate_finite, validate_non_negative, validate_not_blank, validate_positive, validate_required,
};

pub struct FuelTrackingService {
    vehicles: VehicleRepository,
    fuel_events: FuelEventRepository,
    clock: Arc<dyn Clock>,
}

impl Default for FuelTrackingService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl FuelTrackingService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            vehicles: VehicleRepository::new(),
            fuel_events: FuelEventRepository::new(),
            clock,
        }
    }

    /// Crear un vehículo. Marca y modelo se guardan recortados.
    pub async fn create_vehicle(
        &self,
        brand: Option<&str>,
        model: Option<&str>,
        year: i32,
    ) -> AppResult<Vehicle> {
        let (brand, model) = match (brand, model) {
            (Some(brand), Some(model)) => (brand, model),
            _ => return Err(AppError::InvalidInput("brand and model are required".to_string())),
        };
        validate_not_blank(brand, "brand and model must not be blank")?;
        validate_not_blank(model, "brand and model must not be blank")?;
        validate_positive(year, "year must be a positive number")?;

        let vehicle = self
            .vehicles
            .insert(brand.trim().to_string(), model.trim().to_string(), year)
            .await;

        info!(
            "🚗 Vehículo creado: #{} {} {} ({})",
            vehicle.id, vehicle.brand, vehicle.model, vehicle.year
        );
        Ok(vehicle)
    }

    pub async fn list_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.find_all().await
    }

    /// Registrar un repostaje. La existencia del vehículo se comprueba antes
    /// que los campos numéricos.
    pub async fn record_fuel_event(
        &self,
        vehicle_id: VehicleId,
        liters: Option<f64>,
        price: Option<f64>,
        odometer_reading: Option<f64>,
    ) -> AppResult<FuelEvent> {
        self.ensure_vehicle_exists(vehicle_id).await?;

        const REQUIRED: &str = "liters, price, and odometer are required";
        let liters = validate_required(liters, REQUIRED)?;
        let price = validate_required(price, REQUIRED)?;
        let odometer_reading = validate_required(odometer_reading, REQUIRED)?;

        validate_finite(liters, "liters must be a finite number")?;
        validate_finite(price, "price must be a finite number")?;
        validate_finite(odometer_reading, "odometer must be a finite number")?;
        validate_positive(liters, "liters must be greater than zero")?;
        validate_non_negative(price, "price must not be negative")?;
        validate_positive(odometer_reading, "odometer must be greater than zero")?;

        let event = FuelEvent::new(liters, price, odometer_reading, self.clock.now());
        let stored = self.fuel_events.append(vehicle_id, event).await;

        info!(
            "⛽ Repostaje registrado para vehículo {}: {} L, coste {} a {} km",
            vehicle_id, stored.liters, stored.price, stored.odometer_reading
        );
        Ok(stored)
    }

    /// Calcular totales y consumo medio (L/100km) de un vehículo
    pub async fn compute_fuel_stats(&self, vehicle_id: VehicleId) -> AppResult<FuelStats> {
        self.ensure_vehicle_exists(vehicle_id).await?;

        let events = self.fuel_events.find_by_vehicle(vehicle_id).await;
        let stats = summarize(&events)?;

        debug!(
            "📊 Estadísticas vehículo {} ({} repostajes): {:?}",
            vehicle_id,
            events.len(),
            stats
        );
        Ok(stats)
    }

    /// Buscar un vehículo; `NotFound` si no existe
    pub async fn find_vehicle(&self, vehicle_id: VehicleId) -> AppResult<Vehicle> {
        self.ensure_vehicle_exists(vehicle_id).await
    }

    async fn ensure_vehicle_exists(&self, vehicle_id: VehicleId) -> AppResult<Vehicle> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await
            .ok_or(AppError::NotFound(vehicle_id))
    }
}

/// Totales y consumo medio de una lista de repostajes.
///
/// La distancia es `max(odómetro) - min(odómetro)` sobre todas las lecturas,
/// sin tener en cuenta el orden cronológico ni el de inserción. Con menos de
/// dos repostajes, o distancia nula, el consumo medio es 0. Si algún total
/// desborda a infinito se devuelve `Internal`.
fn summarize(events: &[FuelEvent]) -> AppResult<FuelStats> {
    let total_fuel_liters: f64 = events.iter().map(|e| e.liters).sum();
    let total_cost: f64 = events.iter().map(|e| e.price).sum();

    let mut average_consumption_per_100_km = 0.0;
    if events.len() >= 2 {
        let min_odometer = events
            .iter()
            .map(|e| e.odometer_reading)
            .fold(f64::INFINITY, f64::min);
        let max_odometer = events
            .iter()
            .map(|e| e.odometer_reading)
            .fold(f64::NEG_INFINITY, f64::max);

        let distance = max_odometer - min_odometer;
        if distance > 0.0 {
            average_consumption_per_100_km = (total_fuel_liters / distance) * 100.0;
        }
    }

    if !(total_fuel_liters.is_finite()
        && total_cost.is_finite()
        && average_consumption_per_100_km.is_finite())
    {
        return Err(AppError::Internal(
            "fuel statistics overflowed the representable range".to_string(),
        ));
    }

    Ok(FuelStats {
        total_fuel_liters,
        total_cost,
        average_consumption_per_100_km,
    })
}
