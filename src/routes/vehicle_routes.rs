use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::VehicleController;
use crate::dto::fuel_dto::{FuelEventRequest, FuelStatsResponse};
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::models::VehicleId;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route("/:id/fuel", post(add_fuel))
        .route("/:id/fuel/stats", get(get_fuel_stats))
}

// Un cuerpo JSON ilegible o con tipos incorrectos se responde con el
// formato de error de la API
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| bad_request_error(&rejection.body_text()))
}

fn vehicle_id(path: Result<Path<VehicleId>, PathRejection>) -> Result<VehicleId, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| bad_request_error("vehicle id must be a number"))
}

async fn create_vehicle(
    State(state): State<AppState>,
    body: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = json_body(body)?;
    let controller = VehicleController::new(state.tracking.clone());
    let response = controller.create(request).await?;
    let location = format!("/api/vehicles/{}", response.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(response)))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    let controller = VehicleController::new(state.tracking.clone());
    Json(controller.list().await)
}

async fn add_fuel(
    State(state): State<AppState>,
    path: Result<Path<VehicleId>, PathRejection>,
    body: Result<Json<FuelEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = vehicle_id(path)?;
    let controller = VehicleController::new(state.tracking.clone());
    // Vehículo inexistente: 404 aunque el cuerpo sea inválido
    controller.find(id).await?;
    let request = json_body(body)?;
    let response = controller.add_fuel(id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_fuel_stats(
    State(state): State<AppState>,
    path: Result<Path<VehicleId>, PathRejection>,
) -> Result<Json<FuelStatsResponse>, AppError> {
    let id = vehicle_id(path)?;
    let controller = VehicleController::new(state.tracking.clone());
    Ok(Json(controller.fuel_stats(id).await?))
}
