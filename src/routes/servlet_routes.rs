//! Endpoint secundario de estadísticas: `GET /servlet/fuel-stats?vehicleId=N`
//!
//! Duplica la consulta de estadísticas con su propio tratamiento del
//! parámetro de query.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::VehicleController;
use crate::dto::fuel_dto::{FuelStatsQuery, FuelStatsResponse};
use crate::models::VehicleId;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_servlet_router() -> Router<AppState> {
    Router::new().route("/fuel-stats", get(fuel_stats))
}

fn parse_vehicle_id(raw: Option<&str>) -> Result<VehicleId, AppError> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(bad_request_error("vehicleId is required")),
    };
    raw.parse()
        .map_err(|_| bad_request_error("vehicleId must be a number"))
}

async fn fuel_stats(
    State(state): State<AppState>,
    Query(query): Query<FuelStatsQuery>,
) -> Result<Json<FuelStatsResponse>, AppError> {
    let id = parse_vehicle_id(query.vehicle_id.as_deref())?;
    let controller = VehicleController::new(state.tracking.clone());
    Ok(Json(controller.fuel_stats(id).await?))
}
