//! In-memory local repository implementation.
//!
//! Implements every repository trait on top of ordered maps guarded by a single
//! lock. Used for local development, the demo seed and all tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::*;

/// In-memory local repository.
///
/// Cloning shares the underlying store.
///
/// # Example
/// ```
/// use voyage_planner::db::repositories::LocalRepository;
/// use voyage_planner::db::repository::ShipRepository;
/// use voyage_planner::models::{EngineType, NewShip, ShipStatus};
///
/// # tokio_test_block(async {
/// let repo = LocalRepository::new();
/// let ship = repo
///     .insert_ship(NewShip {
///         name: None,
///         engine_type: EngineType::Diesel,
///         capacity: 5000.0,
///         status: ShipStatus::Active,
///     })
///     .await
///     .unwrap();
/// assert_eq!(repo.get_ship(ship.id).await.unwrap(), ship);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    ships: BTreeMap<ShipId, Ship>,
    voyages: BTreeMap<VoyageId, Voyage>,
    maintenance: BTreeMap<MaintenanceId, MaintenanceRecord>,
    fuel_logs: BTreeMap<FuelLogId, FuelLog>,

    // ID counters
    next_ship_id: i64,
    next_voyage_id: i64,
    next_maintenance_id: i64,
    next_fuel_log_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            ships: BTreeMap::new(),
            voyages: BTreeMap::new(),
            maintenance: BTreeMap::new(),
            fuel_logs: BTreeMap::new(),
            next_ship_id: 1,
            next_voyage_id: 1,
            next_maintenance_id: 1,
            next_fuel_log_id: 1,
            is_healthy: true,
        }
    }
}

fn next_id(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository. Health status is kept.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn ship_count(&self) -> usize {
        self.data.read().ships.len()
    }

    pub fn voyage_count(&self) -> usize {
        self.data.read().voyages.len()
    }

    pub fn maintenance_count(&self) -> usize {
        self.data.read().maintenance.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(
                RepositoryError::connection("Database is not healthy").with_operation(operation),
            );
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ship(data: &LocalData, operation: &str, ship_id: ShipId) -> RepositoryResult<()> {
    if data.ships.contains_key(&ship_id) {
        Ok(())
    } else {
        Err(RepositoryError::validation_with_context(
            format!("referenced ship {} does not exist", ship_id),
            ErrorContext::new(operation)
                .with_entity(ShipId::ENTITY)
                .with_entity_id(ship_id),
        ))
    }
}

#[async_trait]
impl ShipRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_ship(&self, ship: NewShip) -> RepositoryResult<Ship> {
        self.check_health("insert_ship")?;
        let mut data = self.data.write();
        let now = Utc::now();
        let record = Ship {
            id: ShipId::new(next_id(&mut data.next_ship_id)),
            name: ship.name,
            engine_type: ship.engine_type,
            capacity: ship.capacity,
            status: ship.status,
            created_at: now,
            updated_at: now,
        };
        data.ships.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_ship(&self, ship_id: ShipId) -> RepositoryResult<Ship> {
        self.check_health("get_ship")?;
        self.data
            .read()
            .ships
            .get(&ship_id)
            .cloned()
            .ok_or_else(|| RepositoryError::missing("get_ship", ShipId::ENTITY, ship_id))
    }

    async fn list_ships(&self) -> RepositoryResult<Vec<Ship>> {
        self.check_health("list_ships")?;
        Ok(self.data.read().ships.values().cloned().collect())
    }
}

#[async_trait]
impl VoyageRepository for LocalRepository {
    async fn insert_voyage(&self, voyage: NewVoyage) -> RepositoryResult<Voyage> {
        self.check_health("insert_voyage")?;
        let mut data = self.data.write();
        ensure_ship(&data, "insert_voyage", voyage.ship_id)?;
        let now = Utc::now();
        let record = Voyage {
            id: VoyageId::new(next_id(&mut data.next_voyage_id)),
            ship_id: voyage.ship_id,
            origin: voyage.origin,
            destination: voyage.destination,
            departure_time: voyage.departure_time,
            arrival_time: None,
            cargo: voyage.cargo,
            weather: voyage.weather,
            plan: voyage.plan,
            actuals: voyage.actuals,
            status: voyage.status,
            created_at: now,
            updated_at: now,
        };
        data.voyages.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_voyage(&self, voyage_id: VoyageId) -> RepositoryResult<Voyage> {
        self.check_health("get_voyage")?;
        self.data
            .read()
            .voyages
            .get(&voyage_id)
            .cloned()
            .ok_or_else(|| RepositoryError::missing("get_voyage", VoyageId::ENTITY, voyage_id))
    }

    async fn update_voyage(&self, voyage: &Voyage) -> RepositoryResult<Voyage> {
        self.check_health("update_voyage")?;
        let mut data = self.data.write();
        let stored = data
            .voyages
            .get_mut(&voyage.id)
            .ok_or_else(|| RepositoryError::missing("update_voyage", VoyageId::ENTITY, voyage.id))?;
        *stored = Voyage {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..voyage.clone()
        };
        Ok(stored.clone())
    }

    async fn list_voyages(&self, query: VoyageQuery) -> RepositoryResult<Vec<Voyage>> {
        self.check_health("list_voyages")?;
        let data = self.data.read();
        let mut voyages: Vec<&Voyage> = data
            .voyages
            .values()
            .filter(|v| query.ship_id.map_or(true, |id| v.ship_id == id))
            .collect();
        voyages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(voyages
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }

    async fn count_voyages(&self, ship_id: Option<ShipId>) -> RepositoryResult<usize> {
        self.check_health("count_voyages")?;
        Ok(self
            .data
            .read()
            .voyages
            .values()
            .filter(|v| ship_id.map_or(true, |id| v.ship_id == id))
            .count())
    }
}

#[async_trait]
impl MaintenanceRepository for LocalRepository {
    async fn insert_maintenance(
        &self,
        record: NewMaintenance,
    ) -> RepositoryResult<MaintenanceRecord> {
        self.check_health("insert_maintenance")?;
        let mut data = self.data.write();
        ensure_ship(&data, "insert_maintenance", record.ship_id)?;
        let now = Utc::now();
        let stored = MaintenanceRecord {
            id: MaintenanceId::new(next_id(&mut data.next_maintenance_id)),
            ship_id: record.ship_id,
            maintenance_type: record.maintenance_type,
            component: record.component,
            description: record.description,
            scheduled_date: record.scheduled_date,
            completed_date: None,
            estimated_duration: record.estimated_duration,
            actual_duration: None,
            cost: record.cost,
            priority: record.priority,
            status: MaintenanceStatus::Scheduled,
            ai_recommended: record.ai_recommended,
            ai_reason_code: record.ai_reason_code,
            created_at: now,
            updated_at: now,
        };
        data.maintenance.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get_maintenance(&self, id: MaintenanceId) -> RepositoryResult<MaintenanceRecord> {
        self.check_health("get_maintenance")?;
        self.data
            .read()
            .maintenance
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::missing("get_maintenance", MaintenanceId::ENTITY, id))
    }

    async fn update_maintenance(
        &self,
        record: &MaintenanceRecord,
    ) -> RepositoryResult<MaintenanceRecord> {
        self.check_health("update_maintenance")?;
        let mut data = self.data.write();
        let stored = data.maintenance.get_mut(&record.id).ok_or_else(|| {
            RepositoryError::missing("update_maintenance", MaintenanceId::ENTITY, record.id)
        })?;
        *stored = MaintenanceRecord {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..record.clone()
        };
        Ok(stored.clone())
    }

    async fn list_maintenance(
        &self,
        query: MaintenanceQuery,
    ) -> RepositoryResult<Vec<MaintenanceRecord>> {
        self.check_health("list_maintenance")?;
        let data = self.data.read();
        let mut records: Vec<MaintenanceRecord> = data
            .maintenance
            .values()
            .filter(|m| query.ship_id.map_or(true, |id| m.ship_id == id))
            .filter(|m| query.scheduled_before.map_or(true, |until| m.scheduled_date <= until))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.scheduled_date.cmp(&b.scheduled_date).then(a.id.cmp(&b.id)));
        Ok(records)
    }
}

#[async_trait]
impl FuelLogRepository for LocalRepository {
    async fn insert_fuel_log(&self, log: NewFuelLog) -> RepositoryResult<FuelLog> {
        self.check_health("insert_fuel_log")?;
        let mut data = self.data.write();
        ensure_ship(&data, "insert_fuel_log", log.ship_id)?;
        if !data.voyages.contains_key(&log.voyage_id) {
            return Err(RepositoryError::validation_with_context(
                format!("referenced voyage {} does not exist", log.voyage_id),
                ErrorContext::new("insert_fuel_log")
                    .with_entity(VoyageId::ENTITY)
                    .with_entity_id(log.voyage_id),
            ));
        }
        let now = Utc::now();
        let stored = FuelLog {
            id: FuelLogId::new(next_id(&mut data.next_fuel_log_id)),
            ship_id: log.ship_id,
            voyage_id: log.voyage_id,
            timestamp: log.timestamp.unwrap_or(now),
            fuel_consumption: log.fuel_consumption,
            fuel_efficiency: log.fuel_efficiency,
            engine_load: log.engine_load,
            speed: log.speed,
            location: log.location,
            weather: log.weather,
            created_at: now,
        };
        data.fuel_logs.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn recent_fuel_logs(
        &self,
        ship_id: ShipId,
        since: DateTime<Utc>,
        limit: usize,
    ) -> RepositoryResult<Vec<FuelLog>> {
        self.check_health("recent_fuel_logs")?;
        let data = self.data.read();
        let mut logs: Vec<&FuelLog> = data
            .fuel_logs
            .values()
            .filter(|l| l.ship_id == ship_id && l.timestamp >= since)
            .collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(logs.into_iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_ship() -> NewShip {
        NewShip {
            name: Some("Test".to_string()),
            engine_type: EngineType::Diesel,
            capacity: 5000.0,
            status: ShipStatus::Active,
        }
    }

    fn new_voyage(ship_id: ShipId, origin: &str) -> NewVoyage {
        NewVoyage {
            ship_id,
            origin: origin.to_string(),
            destination: "Dubai".to_string(),
            departure_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            cargo: 100.0,
            weather: WeatherForecast::from_summary("clear"),
            plan: None,
            actuals: None,
            status: VoyageStatus::Planned,
        }
    }

    fn new_maintenance(ship_id: ShipId, scheduled: DateTime<Utc>) -> NewMaintenance {
        NewMaintenance {
            ship_id,
            maintenance_type: MaintenanceType::Routine,
            component: None,
            description: "check".to_string(),
            scheduled_date: scheduled,
            estimated_duration: 2.0,
            cost: None,
            priority: MaintenancePriority::Medium,
            ai_recommended: false,
            ai_reason_code: AiReasonCode::UsageThreshold,
        }
    }

    #[tokio::test]
    async fn test_ship_roundtrip_and_missing() {
        let repo = LocalRepository::new();
        let ship = repo.insert_ship(new_ship()).await.unwrap();
        assert_eq!(ship.id, ShipId::new(1));
        assert_eq!(repo.get_ship(ship.id).await.unwrap(), ship);

        let err = repo.get_ship(ShipId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unhealthy_store_rejects_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
        let err = repo.insert_ship(new_ship()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_voyage_requires_existing_ship() {
        let repo = LocalRepository::new();
        let err = repo
            .insert_voyage(new_voyage(ShipId::new(5), "Mumbai"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_list_voyages_newest_first_with_window() {
        let repo = LocalRepository::new();
        let a = repo.insert_ship(new_ship()).await.unwrap();
        let b = repo.insert_ship(new_ship()).await.unwrap();
        for origin in ["p1", "p2", "p3"] {
            repo.insert_voyage(new_voyage(a.id, origin)).await.unwrap();
        }
        repo.insert_voyage(new_voyage(b.id, "other")).await.unwrap();

        let all_a = repo
            .list_voyages(VoyageQuery { ship_id: Some(a.id), offset: 0, limit: 10 })
            .await
            .unwrap();
        let origins: Vec<&str> = all_a.iter().map(|v| v.origin.as_str()).collect();
        assert_eq!(origins, vec!["p3", "p2", "p1"]);

        let page_two = repo
            .list_voyages(VoyageQuery { ship_id: Some(a.id), offset: 2, limit: 2 })
            .await
            .unwrap();
        assert_eq!(page_two.len(), 1);
        assert_eq!(page_two[0].origin, "p1");

        assert_eq!(repo.count_voyages(Some(a.id)).await.unwrap(), 3);
        assert_eq!(repo.count_voyages(None).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_update_voyage_keeps_created_at() {
        let repo = LocalRepository::new();
        let ship = repo.insert_ship(new_ship()).await.unwrap();
        let mut voyage = repo.insert_voyage(new_voyage(ship.id, "Mumbai")).await.unwrap();
        let created = voyage.created_at;
        voyage.status = VoyageStatus::Completed;
        voyage.created_at = created + Duration::days(3);
        let updated = repo.update_voyage(&voyage).await.unwrap();
        assert_eq!(updated.status, VoyageStatus::Completed);
        assert_eq!(updated.created_at, created);
    }

    #[tokio::test]
    async fn test_list_maintenance_sorted_and_filtered() {
        let repo = LocalRepository::new();
        let ship = repo.insert_ship(new_ship()).await.unwrap();
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        repo.insert_maintenance(new_maintenance(ship.id, base + Duration::days(20))).await.unwrap();
        repo.insert_maintenance(new_maintenance(ship.id, base + Duration::days(2))).await.unwrap();
        repo.insert_maintenance(new_maintenance(ship.id, base + Duration::days(90))).await.unwrap();

        let records = repo
            .list_maintenance(MaintenanceQuery {
                ship_id: Some(ship.id),
                scheduled_before: Some(base + Duration::days(30)),
            })
            .await
            .unwrap();
        let offsets: Vec<i64> = records
            .iter()
            .map(|r| (r.scheduled_date - base).num_days())
            .collect();
        assert_eq!(offsets, vec![2, 20]);
    }

    #[tokio::test]
    async fn test_recent_fuel_logs_window() {
        let repo = LocalRepository::new();
        let ship = repo.insert_ship(new_ship()).await.unwrap();
        let voyage = repo.insert_voyage(new_voyage(ship.id, "Mumbai")).await.unwrap();
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        for day in 0..5 {
            repo.insert_fuel_log(NewFuelLog {
                ship_id: ship.id,
                voyage_id: voyage.id,
                timestamp: Some(base + Duration::days(day)),
                fuel_consumption: 10.0,
                fuel_efficiency: Some(day as f64),
                engine_load: None,
                speed: None,
                location: None,
                weather: None,
            })
            .await
            .unwrap();
        }
        let logs = repo
            .recent_fuel_logs(ship.id, base + Duration::days(1), 3)
            .await
            .unwrap();
        let eff: Vec<f64> = logs.iter().filter_map(|l| l.fuel_efficiency).collect();
        assert_eq!(eff, vec![4.0, 3.0, 2.0]);
    }

    #[tokio::test]
    async fn test_clear_resets_ids() {
        let repo = LocalRepository::new();
        repo.insert_ship(new_ship()).await.unwrap();
        repo.clear();
        assert_eq!(repo.ship_count(), 0);
        let ship = repo.insert_ship(new_ship()).await.unwrap();
        assert_eq!(ship.id.value(), 1);
    }
}
