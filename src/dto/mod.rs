//! DTOs de la API HTTP

pub mod fuel_dto;
pub mod vehicle_dto;
