//! Ship registry and fuel log intake.

use super::error::{ServiceError, ServiceResult};
use crate::db::{FuelLogRepository, FullRepository, ShipRepository};
use crate::models::*;

fn finite_non_negative(field: &str, value: f64) -> ServiceResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ServiceError::validation(format!(
            "{} must be a non-negative number",
            field
        )))
    }
}

pub async fn register_ship(repo: &dyn FullRepository, mut ship: NewShip) -> ServiceResult<Ship> {
    finite_non_negative("capacity", ship.capacity)?;
    ship.name = ship
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let stored = repo.insert_ship(ship).await?;
    log::info!(
        "Registered ship {} ({}, capacity {})",
        stored.id,
        stored.engine_type.as_str(),
        stored.capacity
    );
    Ok(stored)
}

pub async fn get_ship(repo: &dyn FullRepository, ship_id: ShipId) -> ServiceResult<Ship> {
    Ok(repo.get_ship(ship_id).await?)
}

pub async fn record_fuel_log(
    repo: &dyn FullRepository,
    entry: NewFuelLog,
) -> ServiceResult<FuelLog> {
    finite_non_negative("fuelConsumption", entry.fuel_consumption)?;
    if let Some(load) = entry.engine_load {
        if !(0.0..=100.0).contains(&load) {
            return Err(ServiceError::validation(
                "engineLoad must be between 0 and 100",
            ));
        }
    }
    for (field, value) in [("fuelEfficiency", entry.fuel_efficiency), ("speed", entry.speed)] {
        if let Some(v) = value {
            finite_non_negative(field, v)?;
        }
    }

    let stored = repo.insert_fuel_log(entry).await?;
    log::debug!(
        "Recorded fuel log {} for ship {} voyage {}",
        stored.id,
        stored.ship_id,
        stored.voyage_id
    );
    Ok(stored)
}
