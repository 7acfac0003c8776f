#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::db::{LocalRepository, ShipRepository, VoyageRepository};
    use crate::models::*;
    use crate::optimizer::Advisor;
    use crate::services::error::ServiceError;
    use crate::services::insights::INCOMPLETE_DATA_INSIGHT;
    use crate::services::variance::StatusLabel;
    use crate::services::voyages::*;

    fn departure() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap()
    }

    async fn repo_with_ship(capacity: f64) -> (LocalRepository, Ship) {
        let repo = LocalRepository::new();
        let ship = repo
            .insert_ship(NewShip {
                name: Some("Coral Star".to_string()),
                engine_type: EngineType::Diesel,
                capacity,
                status: ShipStatus::Active,
            })
            .await
            .unwrap();
        (repo, ship)
    }

    fn plan_input(ship_id: ShipId, cargo: f64) -> PlanVoyageInput {
        PlanVoyageInput {
            ship_id,
            origin: "  Mumbai ".to_string(),
            destination: "Dubai".to_string(),
            departure_time: departure(),
            weather: WeatherForecast::from_summary("clear"),
            cargo_load: cargo,
        }
    }

    #[tokio::test]
    async fn test_plan_voyage_persists_basic_plan() {
        let (repo, ship) = repo_with_ship(5000.0).await;
        let planned = plan_voyage(&repo, &Advisor::basic(), plan_input(ship.id, 3000.0))
            .await
            .unwrap();

        assert_eq!(planned.ship.id, ship.id);
        assert_eq!(planned.plan.estimated_duration, Some(40.0));
        assert_eq!(planned.plan.route[0], "Mumbai");

        let stored = repo.get_voyage(planned.voyage_id).await.unwrap();
        assert_eq!(stored.origin, "Mumbai");
        assert_eq!(stored.status, VoyageStatus::Planned);
        assert_eq!(stored.plan, Some(planned.plan));
    }

    #[tokio::test]
    async fn test_plan_voyage_rejections() {
        let (repo, ship) = repo_with_ship(1000.0).await;
        let advisor = Advisor::basic();

        let err = plan_voyage(&repo, &advisor, plan_input(ship.id, 1500.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Cargo exceeds ship capacity"));

        let err = plan_voyage(&repo, &advisor, plan_input(ship.id, 0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let mut blank = plan_input(ship.id, 10.0);
        blank.destination = "   ".to_string();
        let err = plan_voyage(&repo, &advisor, blank).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = plan_voyage(&repo, &advisor, plan_input(ShipId::new(42), 10.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Ship not found"));
        assert_eq!(repo.voyage_count(), 0);
    }

    #[tokio::test]
    async fn test_feedback_merges_and_completes() {
        let (repo, ship) = repo_with_ship(5000.0).await;
        let advisor = Advisor::basic();
        let planned = plan_voyage(&repo, &advisor, plan_input(ship.id, 3000.0))
            .await
            .unwrap();

        // Partial feedback: fuel only, voyage still under way.
        let first = submit_feedback(
            &repo,
            &advisor,
            FeedbackInput {
                voyage_id: planned.voyage_id,
                actual_fuel_used: Some(2070.0),
                deviations: vec!["Port congestion".to_string(), "clear skies".to_string()],
                ..FeedbackInput::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(first.status, VoyageStatus::Planned);
        assert!(!first.data_complete);
        let fuel = first.performance.fuel_efficiency.clone().unwrap();
        assert_eq!(fuel.variance, "+15.0%");
        assert_eq!(fuel.status, Some(StatusLabel::Acceptable));
        assert_eq!(first.insights.len(), 2);
        assert!(first.insights[1].starts_with("Port-related delays"));

        // Arrival completes the voyage; fuel from the first call is kept.
        let second = submit_feedback(
            &repo,
            &advisor,
            FeedbackInput {
                voyage_id: planned.voyage_id,
                actual_arrival: Some(departure() + Duration::hours(44)),
                actual_speed: Some(25.0),
                actual_duration: Some(44.0),
                ..FeedbackInput::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(second.status, VoyageStatus::Completed);
        assert!(second.data_complete);
        assert_eq!(second.performance.time_accuracy.as_ref().unwrap().variance, "+10.0%");
        assert!(second.data_stored_for_learning);

        let stored = repo.get_voyage(planned.voyage_id).await.unwrap();
        let actuals = stored.actuals.unwrap();
        assert_eq!(actuals.actual_fuel_used, Some(2070.0));
        assert_eq!(actuals.deviations.len(), 2);
        assert_eq!(stored.arrival_time, Some(departure() + Duration::hours(44)));
    }

    #[tokio::test]
    async fn test_feedback_without_plan_reports_incomplete() {
        let (repo, ship) = repo_with_ship(5000.0).await;
        let voyage = repo
            .insert_voyage(NewVoyage {
                ship_id: ship.id,
                origin: "A".to_string(),
                destination: "B".to_string(),
                departure_time: departure(),
                cargo: 10.0,
                weather: WeatherForecast::from_summary("fog"),
                plan: None,
                actuals: None,
                status: VoyageStatus::Planned,
            })
            .await
            .unwrap();

        let outcome = submit_feedback(
            &repo,
            &Advisor::basic(),
            FeedbackInput {
                voyage_id: voyage.id,
                actual_fuel_used: Some(100.0),
                ..FeedbackInput::default()
            },
        )
        .await
        .unwrap();
        assert!(outcome.performance.is_empty());
        assert_eq!(outcome.insights, vec![INCOMPLETE_DATA_INSIGHT.to_string()]);
    }

    #[tokio::test]
    async fn test_feedback_unknown_voyage() {
        let repo = LocalRepository::new();
        let err = submit_feedback(
            &repo,
            &Advisor::basic(),
            FeedbackInput {
                voyage_id: VoyageId::new(9),
                ..FeedbackInput::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Voyage not found"));
    }

    #[test]
    fn test_merge_ignores_unusable_values() {
        let existing = VoyageActuals {
            actual_speed: Some(20.0),
            deviations: vec!["storm".to_string()],
            ..VoyageActuals::default()
        };
        let input = FeedbackInput {
            actual_speed: Some(0.0),
            actual_duration: Some(f64::NAN),
            actual_fuel_used: Some(50.0),
            ..FeedbackInput::default()
        };
        let merged = merge_actuals(Some(existing), &input);
        assert_eq!(merged.actual_speed, Some(20.0));
        assert_eq!(merged.actual_duration, None);
        assert_eq!(merged.actual_fuel_used, Some(50.0));
        assert_eq!(merged.deviations, vec!["storm".to_string()]);
    }

    #[tokio::test]
    async fn test_history_pages_newest_first() {
        let (repo, ship) = repo_with_ship(5000.0).await;
        let advisor = Advisor::basic();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let planned = plan_voyage(&repo, &advisor, plan_input(ship.id, 100.0))
                .await
                .unwrap();
            ids.push(planned.voyage_id);
        }

        let page = plan_history(
            &repo,
            HistoryQuery {
                ship_id: Some(ship.id),
                page: 2,
                limit: 2,
            },
        )
        .await
        .unwrap();
        let got: Vec<VoyageId> = page.history.iter().map(|e| e.voyage_id).collect();
        assert_eq!(got, vec![ids[2], ids[1]]);
        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 2,
                total_pages: 3,
                total_items: 5
            }
        );

        let entry = &page.history[0];
        assert_eq!(entry.ship.as_ref().unwrap().id, ship.id);
        assert_eq!(entry.planned.speed, Some(25.0));
        assert_eq!(entry.actuals.fuel, None);
        assert!(entry.performance.is_none());
    }

    #[tokio::test]
    async fn test_history_performance_summary_and_clamping() {
        let (repo, ship) = repo_with_ship(5000.0).await;
        let advisor = Advisor::basic();
        let planned = plan_voyage(&repo, &advisor, plan_input(ship.id, 100.0))
            .await
            .unwrap();
        submit_feedback(
            &repo,
            &advisor,
            FeedbackInput {
                voyage_id: planned.voyage_id,
                actual_fuel_used: Some(1710.0),
                ..FeedbackInput::default()
            },
        )
        .await
        .unwrap();

        let page = plan_history(
            &repo,
            HistoryQuery {
                ship_id: None,
                page: 1,
                limit: 0,
            },
        )
        .await
        .unwrap();
        assert_eq!(page.history.len(), 1);
        let performance = page.history[0].performance.as_ref().unwrap();
        assert_eq!(performance.get("fuelEfficiency").map(String::as_str), Some("-5.0%"));
        assert!(!performance.contains_key("speedAccuracy"));

        let err = plan_history(&repo, HistoryQuery { page: 0, ..HistoryQuery::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_history() {
        let repo = LocalRepository::new();
        let page = plan_history(&repo, HistoryQuery::default()).await.unwrap();
        assert!(page.history.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert_eq!(page.pagination.total_items, 0);
    }
}
