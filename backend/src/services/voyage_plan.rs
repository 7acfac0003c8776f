//! Basic voyage plan, the deterministic fallback for route optimization.

use chrono::{DateTime, Duration, Utc};

use crate::models::{EngineType, VoyagePlan};

/// Nominal leg length assumed when no route data is available (nautical miles).
pub const NOMINAL_DISTANCE_NM: f64 = 1000.0;
/// Fuel burned per hour underway.
pub const FUEL_PER_HOUR: f64 = 45.0;
pub const BASIC_METHOD: &str = "basic";

/// Cruising speed in knots for an engine type.
pub fn basic_speed(engine: EngineType) -> f64 {
    match engine {
        EngineType::Diesel => 25.0,
        EngineType::GasTurbine => 30.0,
        EngineType::Electric => 20.0,
        EngineType::Hybrid => 28.0,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build a plan from engine type and endpoints alone.
pub fn create_basic_plan(
    engine: EngineType,
    origin: &str,
    destination: &str,
    departure: DateTime<Utc>,
) -> VoyagePlan {
    let speed = basic_speed(engine);
    let duration_hours = NOMINAL_DISTANCE_NM / speed;
    let fuel = duration_hours * FUEL_PER_HOUR;
    let travel = Duration::milliseconds((duration_hours * 3_600_000.0).round() as i64);

    VoyagePlan {
        estimated_arrival: Some(departure + travel),
        planned_speed: Some(speed),
        expected_fuel_use: Some(round1(fuel)),
        route: vec![
            origin.to_string(),
            format!("{}-waypoint", origin),
            destination.to_string(),
        ],
        estimated_duration: Some(round1(duration_hours)),
        optimization_method: Some(BASIC_METHOD.to_string()),
        confidence: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn departure() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap()
    }

    #[test]
    fn test_diesel_plan() {
        let plan = create_basic_plan(EngineType::Diesel, "Mumbai", "Dubai", departure());
        assert_eq!(plan.planned_speed, Some(25.0));
        assert_eq!(plan.estimated_duration, Some(40.0));
        assert_eq!(plan.expected_fuel_use, Some(1800.0));
        assert_eq!(plan.estimated_arrival, Some(departure() + Duration::hours(40)));
        assert_eq!(plan.route, vec!["Mumbai", "Mumbai-waypoint", "Dubai"]);
        assert_eq!(plan.optimization_method.as_deref(), Some(BASIC_METHOD));
    }

    #[test]
    fn test_gas_turbine_rounding() {
        let plan = create_basic_plan(EngineType::GasTurbine, "A", "B", departure());
        // 1000 / 30 = 33.333.. hours, 1500 fuel
        assert_eq!(plan.estimated_duration, Some(33.3));
        assert_eq!(plan.expected_fuel_use, Some(1500.0));
        let arrival = plan.estimated_arrival.unwrap();
        assert_eq!(arrival, departure() + Duration::milliseconds(120_000_000));
    }

    #[test]
    fn test_hybrid_and_electric_speeds() {
        assert_eq!(basic_speed(EngineType::Hybrid), 28.0);
        assert_eq!(basic_speed(EngineType::Electric), 20.0);
        let plan = create_basic_plan(EngineType::Hybrid, "A", "B", departure());
        assert_eq!(plan.estimated_duration, Some(35.7));
        assert_eq!(plan.expected_fuel_use, Some(1607.1));
    }
}
