//! Repositorios en memoria
//!
//! Los dos almacenes del sistema: el registro de vehículos y el historial
//! de repostajes. Ninguno conoce al otro.

pub mod fuel_event_repository;
pub mod vehicle_repository;

pub use fuel_event_repository::FuelEventRepository;
pub use vehicle_repository::VehicleRepository;
