//! Fuel Tracker CLI
//!
//! Cliente de línea de comandos para la API de vehículos y repostajes.
//!
//! ```bash
//! fuel-cli create-vehicle --brand Toyota --model Corolla --year 2020
//! fuel-cli add-fuel --vehicle-id 1 --liters 40 --price 60 --odometer 1000
//! fuel-cli fuel-stats --vehicle-id 1
//! fuel-cli list-vehicles --base-url http://localhost:9000
//! ```

mod client;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::FuelApiClient;
use display::*;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Parser, Debug)]
#[command(name = "fuel-cli")]
#[command(about = "Command-line client for the fuel tracker API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the fuel tracker API
    #[arg(long, global = true, env = "FUEL_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Register a new vehicle
    CreateVehicle {
        #[arg(long)]
        brand: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        year: i32,
    },
    /// List all registered vehicles
    ListVehicles,
    /// Record a refueling event
    AddFuel {
        #[arg(long)]
        vehicle_id: u64,
        /// Liters added
        #[arg(long)]
        liters: f64,
        /// Total cost of the refueling
        #[arg(long)]
        price: f64,
        /// Odometer reading at refueling time
        #[arg(long)]
        odometer: f64,
    },
    /// Show fuel statistics for a vehicle
    FuelStats {
        #[arg(long)]
        vehicle_id: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = FuelApiClient::new(&cli.base_url);

    match cli.command {
        Commands::CreateVehicle { brand, model, year } => {
            let vehicle = client.create_vehicle(&brand, &model, year).await?;
            print_success(&format_vehicle_created(&vehicle));
        }
        Commands::ListVehicles => {
            let vehicles = client.list_vehicles().await?;
            if vehicles.is_empty() {
                print_line("No vehicles registered");
            }
            for vehicle in &vehicles {
                print_line(&format_vehicle_line(vehicle));
            }
        }
        Commands::AddFuel {
            vehicle_id,
            liters,
            price,
            odometer,
        } => {
            let event = client.add_fuel(vehicle_id, liters, price, odometer).await?;
            print_success(&format_fuel_added(&event));
        }
        Commands::FuelStats { vehicle_id } => {
            let stats = client.fuel_stats(vehicle_id).await?;
            for line in format_fuel_stats(&stats) {
                print_line(&line);
            }
        }
    }

    Ok(())
}
