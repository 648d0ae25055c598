//! Formato de salida en terminal

use colored::Colorize;

use crate::client::{FuelEventSummary, FuelStatsSummary, VehicleSummary};

pub fn format_vehicle_created(vehicle: &VehicleSummary) -> String {
    format!(
        "Created vehicle #{}: {} {} ({})",
        vehicle.id, vehicle.brand, vehicle.model, vehicle.year
    )
}

pub fn format_vehicle_line(vehicle: &VehicleSummary) -> String {
    format!(
        "#{} {} {} ({})",
        vehicle.id, vehicle.brand, vehicle.model, vehicle.year
    )
}

pub fn format_fuel_added(event: &FuelEventSummary) -> String {
    format!(
        "Added fuel: {:.2} L, cost {:.2} at odometer {:.1}",
        event.liters, event.price, event.odometer
    )
}

pub fn format_fuel_stats(stats: &FuelStatsSummary) -> Vec<String> {
    vec![
        format!("Total fuel: {:.1} L", stats.total_fuel_liters),
        format!("Total cost: {:.2}", stats.total_cost),
        format!(
            "Average consumption: {:.1} L/100km",
            stats.average_consumption_per_100_km
        ),
    ]
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg.green());
}

pub fn print_line(msg: &str) {
    println!("{}", msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg.red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vehicle_created() {
        let vehicle = VehicleSummary {
            id: 1,
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: 2020,
        };
        assert_eq!(format_vehicle_created(&vehicle), "Created vehicle #1: Toyota Corolla (2020)");
        assert_eq!(format_vehicle_line(&vehicle), "#1 Toyota Corolla (2020)");
    }

    #[test]
    fn test_format_fuel_added() {
        let event = FuelEventSummary {
            liters: 40.0,
            price: 60.456,
            odometer: 1000.0,
        };
        assert_eq!(
            format_fuel_added(&event),
            "Added fuel: 40.00 L, cost 60.46 at odometer 1000.0"
        );
    }

    #[test]
    fn test_format_fuel_stats() {
        let stats = FuelStatsSummary {
            total_fuel_liters: 75.0,
            total_cost: 115.0,
            average_consumption_per_100_km: 15.0,
        };
        assert_eq!(
            format_fuel_stats(&stats),
            vec![
                "Total fuel: 75.0 L",
                "Total cost: 115.00",
                "Average consumption: 15.0 L/100km",
            ]
        );
    }
}
