//! Historial de repostajes por vehículo
//!
//! Cada vehículo tiene su propia lista protegida por un `Mutex`, de modo que
//! los repostajes de vehículos distintos no compiten entre sí. El mapa
//! exterior solo se bloquea en escritura la primera vez que aparece un
//! vehículo.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::models::{FuelEvent, VehicleId};

type History = Arc<Mutex<Vec<FuelEvent>>>;

#[derive(Default)]
pub struct FuelEventRepository {
    histories: RwLock<HashMap<VehicleId, History>>,
}

impl FuelEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn history_for(&self, vehicle_id: VehicleId) -> History {
        if let Some(history) = self.histories.read().await.get(&vehicle_id) {
            return history.clone();
        }

        self.histories
            .write()
            .await
            .entry(vehicle_id)
            .or_default()
            .clone()
    }

    /// Añadir un repostaje al historial del vehículo. No comprueba que el
    /// vehículo exista.
    pub async fn append(&self, vehicle_id: VehicleId, event: FuelEvent) -> FuelEvent {
        let history = self.history_for(vehicle_id).await;
        let mut events = history.lock().await;
        events.push(event.clone());
        debug!("⛽ Repostaje #{} registrado para vehículo {}", events.len(), vehicle_id);
        event
    }

    /// Repostajes del vehículo en orden de inserción; vacío si no hay ninguno
    pub async fn find_by_vehicle(&self, vehicle_id: VehicleId) -> Vec<FuelEvent> {
        let history = match self.histories.read().await.get(&vehicle_id) {
            Some(history) => history.clone(),
            None => return Vec::new(),
        };

        let events = history.lock().await;
        events.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(liters: f64, odometer: f64) -> FuelEvent {
        FuelEvent::new(liters, liters * 1.5, odometer, Utc::now())
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let repository = FuelEventRepository::new();

        repository.append(1, event(40.0, 1500.0)).await;
        repository.append(1, event(35.0, 1000.0)).await;
        repository.append(1, event(20.0, 1200.0)).await;

        let odometers: Vec<f64> = repository
            .find_by_vehicle(1)
            .await
            .iter()
            .map(|e| e.odometer_reading)
            .collect();
        assert_eq!(odometers, vec![1500.0, 1000.0, 1200.0]);
    }

    #[tokio::test]
    async fn test_append_returns_event_unchanged() {
        let repository = FuelEventRepository::new();
        let original = event(12.5, 300.0);

        let stored = repository.append(3, original.clone()).await;
        assert_eq!(stored, original);
    }

    #[tokio::test]
    async fn test_unknown_vehicle_has_empty_history() {
        let repository = FuelEventRepository::new();
        repository.append(1, event(10.0, 100.0)).await;

        assert!(repository.find_by_vehicle(2).await.is_empty());
        assert!(repository.find_by_vehicle(404).await.is_empty());
    }

    #[tokio::test]
    async fn test_histories_are_isolated() {
        let repository = FuelEventRepository::new();
        repository.append(1, event(10.0, 100.0)).await;
        repository.append(2, event(20.0, 200.0)).await;
        repository.append(2, event(30.0, 300.0)).await;

        assert_eq!(repository.find_by_vehicle(1).await.len(), 1);
        assert_eq!(repository.find_by_vehicle(2).await.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let repository = Arc::new(FuelEventRepository::new());

        let tasks = (0..200).map(|i| {
            let repository = repository.clone();
            tokio::spawn(async move {
                let vehicle_id = (i % 4) as VehicleId;
                repository.append(vehicle_id, event(1.0, i as f64 + 1.0)).await
            })
        });
        for result in futures::future::join_all(tasks).await {
            result.unwrap();
        }

        for vehicle_id in 0..4 {
            assert_eq!(repository.find_by_vehicle(vehicle_id).await.len(), 50);
        }
    }
}
