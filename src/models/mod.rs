//! Modelos de datos
//!
//! Este módulo contiene los registros del dominio: vehículos,
//! repostajes y estadísticas de consumo.

pub mod fuel_event;
pub mod fuel_stats;
pub mod vehicle;

pub use fuel_event::FuelEvent;
pub use fuel_stats::FuelStats;
pub use vehicle::{Vehicle, VehicleId};
