//! Registro de vehículos en memoria
//!
//! Asigna identificadores con un contador atómico (empezando en 1) y guarda
//! los vehículos en un mapa protegido por `RwLock`. El estado vive mientras
//! dure el proceso.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Vehicle, VehicleId};

pub struct VehicleRepository {
    vehicles: RwLock<BTreeMap<VehicleId, Vehicle>>,
    next_id: AtomicU64,
}

impl Default for VehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self {
            vehicles: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Guardar un vehículo nuevo. No valida nada: el llamador ya lo hizo.
    ///
    /// El identificador se reserva antes de insertar, así que nunca se
    /// reutiliza aunque dos llamadas concurrentes compitan.
    pub async fn insert(&self, brand: String, model: String, year: i32) -> Vehicle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let vehicle = Vehicle::new(id, brand, model, year);

        self.vehicles.write().await.insert(id, vehicle.clone());
        debug!("🚗 Vehículo {} guardado", id);

        vehicle
    }

    /// Snapshot de todos los vehículos, ordenados por id
    pub async fn find_all(&self) -> Vec<Vehicle> {
        self.vehicles.read().await.values().cloned().collect()
    }

    pub async fn find_by_id(&self, id: VehicleId) -> Option<Vehicle> {
        self.vehicles.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let repository = VehicleRepository::new();

        let first = repository.insert("Toyota".into(), "Corolla".into(), 2020).await;
        let second = repository.insert("Renault".into(), "Clio".into(), 2018).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.brand, "Renault");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repository = VehicleRepository::new();
        let vehicle = repository.insert("Peugeot".into(), "208".into(), 2021).await;

        assert_eq!(repository.find_by_id(vehicle.id).await, Some(vehicle));
        assert_eq!(repository.find_by_id(99).await, None);
    }

    #[tokio::test]
    async fn test_find_all_is_a_snapshot() {
        let repository = VehicleRepository::new();
        assert!(repository.find_all().await.is_empty());

        repository.insert("Fiat".into(), "Panda".into(), 2012).await;
        let snapshot = repository.find_all().await;
        repository.insert("Seat".into(), "Ibiza".into(), 2015).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repository.find_all().await.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_never_collide() {
        let repository = Arc::new(VehicleRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repository = repository.clone();
                tokio::spawn(async move {
                    repository.insert(format!("Brand{}", i), "Model".into(), 2000 + i).await
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let vehicle = handle.await.unwrap();
            // Visible en cuanto insert() retorna
            assert!(repository.find_by_id(vehicle.id).await.is_some());
            ids.insert(vehicle.id);
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().min(), Some(&1));
        assert_eq!(ids.iter().max(), Some(&64));
    }
}
