//! Demo data for local runs.

use chrono::{DateTime, Duration, Utc};

use super::repository::{
    FullRepository, MaintenanceRepository, RepositoryResult, ShipRepository, VoyageRepository,
};
use crate::models::*;

/// Identifiers of the records created by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSeed {
    pub ship_id: ShipId,
    pub voyage_id: VoyageId,
    pub maintenance_id: MaintenanceId,
}

/// Insert one ship, one completed voyage and one critical maintenance job.
///
/// The maintenance job is scheduled two days after `now` so it shows up in the
/// default alert window.
pub async fn seed_demo_data(
    repo: &dyn FullRepository,
    now: DateTime<Utc>,
) -> RepositoryResult<DemoSeed> {
    let ship = repo
        .insert_ship(NewShip {
            name: Some("Demo Carrier".to_string()),
            engine_type: EngineType::Diesel,
            capacity: 5000.0,
            status: ShipStatus::Active,
        })
        .await?;

    let voyage = repo
        .insert_voyage(NewVoyage {
            ship_id: ship.id,
            origin: "Mumbai".to_string(),
            destination: "Dubai".to_string(),
            departure_time: now,
            cargo: 3000.0,
            weather: WeatherForecast::from_summary("clear"),
            plan: None,
            actuals: None,
            status: VoyageStatus::Completed,
        })
        .await?;

    let maintenance = repo
        .insert_maintenance(NewMaintenance {
            ship_id: ship.id,
            maintenance_type: MaintenanceType::Routine,
            component: None,
            description: "Engine check".to_string(),
            scheduled_date: now + Duration::days(2),
            estimated_duration: 4.0,
            cost: None,
            priority: MaintenancePriority::Critical,
            ai_recommended: false,
            ai_reason_code: AiReasonCode::default(),
        })
        .await?;

    log::info!(
        "Seeded demo data: ship={} voyage={} maintenance={}",
        ship.id,
        voyage.id,
        maintenance.id
    );

    Ok(DemoSeed {
        ship_id: ship.id,
        voyage_id: voyage.id,
        maintenance_id: maintenance.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::MaintenanceQuery;

    #[tokio::test]
    async fn test_seed_inserts_linked_records() {
        let repo = LocalRepository::new();
        let now = Utc::now();
        let seed = seed_demo_data(&repo, now).await.unwrap();

        let voyage = repo.get_voyage(seed.voyage_id).await.unwrap();
        assert_eq!(voyage.ship_id, seed.ship_id);
        assert_eq!(voyage.status, VoyageStatus::Completed);
        assert_eq!(voyage.weather.forecast, "clear");

        let jobs = repo
            .list_maintenance(MaintenanceQuery {
                ship_id: Some(seed.ship_id),
                scheduled_before: Some(now + Duration::days(30)),
            })
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].priority, MaintenancePriority::Critical);
    }
}
