//! Cliente HTTP de la API de combustible

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VehicleSummary {
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FuelEventSummary {
    pub liters: f64,
    pub price: f64,
    pub odometer: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelStatsSummary {
    pub total_fuel_liters: f64,
    pub total_cost: f64,
    #[serde(rename = "averageConsumptionPer100Km")]
    pub average_consumption_per_100_km: f64,
}

#[derive(Debug, Serialize)]
struct NewFuelEvent {
    liters: f64,
    price: f64,
    odometer: f64,
}

pub struct FuelApiClient {
    http: Client,
    base_url: String,
}

impl FuelApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_vehicle(&self, brand: &str, model: &str, year: i32) -> Result<VehicleSummary> {
        let response = self
            .http
            .post(self.url("/api/vehicles"))
            .json(&json!({ "brand": brand, "model": model, "year": year }))
            .send()
            .await
            .context("Request failed")?;
        read_json(response).await
    }

    pub async fn list_vehicles(&self) -> Result<Vec<VehicleSummary>> {
        let response = self
            .http
            .get(self.url("/api/vehicles"))
            .send()
            .await
            .context("Request failed")?;
        read_json(response).await
    }

    pub async fn add_fuel(
        &self,
        vehicle_id: u64,
        liters: f64,
        price: f64,
        odometer: f64,
    ) -> Result<FuelEventSummary> {
        let response = self
            .http
            .post(self.url(&format!("/api/vehicles/{}/fuel", vehicle_id)))
            .json(&NewFuelEvent { liters, price, odometer })
            .send()
            .await
            .context("Request failed")?;
        read_json(response).await
    }

    pub async fn fuel_stats(&self, vehicle_id: u64) -> Result<FuelStatsSummary> {
        let response = self
            .http
            .get(self.url(&format!("/api/vehicles/{}/fuel/stats", vehicle_id)))
            .send()
            .await
            .context("Request failed")?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.context("Failed to read response body")?;

    if !status.is_success() {
        bail!("Request failed ({}): {}", status.as_u16(), extract_message(&body));
    }

    serde_json::from_str(&body).context("Failed to parse response body")
}

/// Mensaje legible de un cuerpo de error: el campo `message` si es JSON,
/// el cuerpo tal cual si no lo es
pub fn extract_message(body: &str) -> String {
    if body.trim().is_empty() {
        return "no response body".to_string();
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("message") {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"error":"Not Found","message":"Vehicle not found: 3"}"#),
            "Vehicle not found: 3"
        );
        assert_eq!(extract_message(r#"{"status":"down"}"#), r#"{"status":"down"}"#);
        assert_eq!(extract_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_message("   "), "no response body");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = FuelApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/vehicles"), "http://localhost:8080/api/vehicles");
    }

    #[test]
    fn test_stats_deserialize() {
        let stats: FuelStatsSummary = serde_json::from_str(
            r#"{"totalFuelLiters":75.0,"totalCost":115.0,"averageConsumptionPer100Km":15.0}"#,
        )
        .unwrap();
        assert_eq!(stats.total_fuel_liters, 75.0);
        assert_eq!(stats.average_consumption_per_100_km, 15.0);
    }
}
