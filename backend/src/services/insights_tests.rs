#[cfg(test)]
mod tests {
    use crate::models::{ActualMetrics, PlannedMetrics};
    use crate::services::insights::*;

    fn plan(fuel: f64, duration: f64) -> PlannedMetrics {
        PlannedMetrics {
            expected_fuel_use: Some(fuel),
            planned_speed: Some(25.0),
            estimated_duration: Some(duration),
        }
    }

    fn actuals(fuel: Option<f64>, duration: Option<f64>, deviations: &[&str]) -> ActualMetrics {
        ActualMetrics {
            actual_fuel_used: fuel,
            actual_speed: None,
            actual_duration: duration,
            deviations: deviations.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_missing_side_returns_incomplete_notice() {
        let p = plan(100.0, 10.0);
        assert_eq!(generate_insights(Some(&p), None), vec![INCOMPLETE_DATA_INSIGHT]);
        assert_eq!(generate_insights(None, None), vec![INCOMPLETE_DATA_INSIGHT]);
    }

    #[test]
    fn test_fuel_overage_warns() {
        let insights = generate_insights(Some(&plan(100.0, 10.0)), Some(&actuals(Some(120.0), None, &[])));
        assert_eq!(
            insights,
            vec!["Fuel consumption was 20.0% higher than planned. Consider route optimization."]
        );
    }

    #[test]
    fn test_fuel_at_fifteen_is_nominal() {
        let insights = generate_insights(Some(&plan(100.0, 10.0)), Some(&actuals(Some(115.0), None, &[])));
        assert_eq!(insights, vec![FUEL_NOMINAL_INSIGHT]);
    }

    #[test]
    fn test_fuel_saving_praised() {
        let insights = generate_insights(Some(&plan(100.0, 10.0)), Some(&actuals(Some(90.0), None, &[])));
        assert_eq!(
            insights,
            vec!["Excellent fuel efficiency! Used 10.0% less fuel than planned."]
        );
    }

    #[test]
    fn test_duration_overrun_and_speedup() {
        let slow = generate_insights(Some(&plan(100.0, 10.0)), Some(&actuals(None, Some(12.0), &[])));
        assert_eq!(
            slow,
            vec!["Journey took 20.0% longer than planned. Weather or routing factors may need adjustment."]
        );

        let fast = generate_insights(Some(&plan(100.0, 10.0)), Some(&actuals(None, Some(9.0), &[])));
        assert_eq!(
            fast,
            vec!["Journey completed 10.0% faster than planned. Excellent performance!"]
        );
    }

    #[test]
    fn test_on_time_duration_has_no_sentence() {
        let insights = generate_insights(Some(&plan(100.0, 10.0)), Some(&actuals(Some(100.0), Some(10.5), &[])));
        assert_eq!(insights, vec![FUEL_NOMINAL_INSIGHT]);
    }

    #[test]
    fn test_port_deviation_without_weather() {
        let insights = generate_insights(
            Some(&PlannedMetrics::default()),
            Some(&actuals(None, None, &["Port congestion", "clear skies"])),
        );
        assert_eq!(insights, vec![PORT_DEVIATION_INSIGHT]);
    }

    #[test]
    fn test_weather_deviation_emitted_once() {
        let insights = generate_insights(
            Some(&PlannedMetrics::default()),
            Some(&actuals(None, None, &["STORM off the cape", "Head wind", "bad weather"])),
        );
        assert_eq!(insights, vec![WEATHER_DEVIATION_INSIGHT]);
    }

    #[test]
    fn test_weather_and_port_both_fire_in_order() {
        let insights = generate_insights(
            Some(&plan(100.0, 10.0)),
            Some(&actuals(Some(100.0), None, &["storm delay at port"])),
        );
        assert_eq!(
            insights,
            vec![FUEL_NOMINAL_INSIGHT, WEATHER_DEVIATION_INSIGHT, PORT_DEVIATION_INSIGHT]
        );
    }

    #[test]
    fn test_nothing_to_say_returns_default() {
        let insights = generate_insights(Some(&PlannedMetrics::default()), Some(&ActualMetrics::default()));
        assert_eq!(insights, vec![DEFAULT_INSIGHT]);
    }

    #[test]
    fn test_thresholds_use_unrounded_percent() {
        // 15.04% and 10.04% display as 15.0% and 10.0% but are over the line.
        let over = generate_insights(
            Some(&plan(1000.0, 1000.0)),
            Some(&actuals(Some(1150.4), Some(1100.4), &[])),
        );
        assert_eq!(
            over,
            vec![
                "Fuel consumption was 15.0% higher than planned. Consider route optimization.",
                "Journey took 10.0% longer than planned. Weather or routing factors may need adjustment.",
            ]
        );

        let under = generate_insights(
            Some(&plan(1000.0, 1000.0)),
            Some(&actuals(Some(949.6), Some(949.6), &[])),
        );
        assert_eq!(
            under,
            vec![
                "Excellent fuel efficiency! Used 5.0% less fuel than planned.",
                "Journey completed 5.0% faster than planned. Excellent performance!",
            ]
        );
    }

    #[test]
    fn test_just_inside_thresholds_stays_nominal() {
        let insights = generate_insights(
            Some(&plan(1000.0, 1000.0)),
            Some(&actuals(Some(1149.6), Some(1099.6), &[])),
        );
        assert_eq!(insights, vec![FUEL_NOMINAL_INSIGHT]);
    }
}
