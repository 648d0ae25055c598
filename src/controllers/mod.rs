//! Controladores: traducen DTOs de la API a llamadas del servicio

pub mod vehicle_controller;

pub use vehicle_controller::VehicleController;
