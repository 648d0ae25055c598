pub mod servlet_routes;
pub mod vehicle_routes;
