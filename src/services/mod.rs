//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: validación,
//! integridad referencial entre vehículos y repostajes, y estadísticas.

pub mod clock;
pub mod fuel_tracking_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fuel_tracking_service::FuelTrackingService;
