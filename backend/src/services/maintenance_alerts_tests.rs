#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::models::*;
    use crate::services::maintenance_alerts::{classify_alerts, days_until};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap()
    }

    fn record(id: i64, scheduled: DateTime<Utc>, priority: MaintenancePriority) -> MaintenanceRecord {
        MaintenanceRecord {
            id: MaintenanceId::new(id),
            ship_id: ShipId::new(1),
            maintenance_type: MaintenanceType::Routine,
            component: None,
            description: format!("job {}", id),
            scheduled_date: scheduled,
            completed_date: None,
            estimated_duration: 4.0,
            actual_duration: None,
            cost: None,
            priority,
            status: MaintenanceStatus::Scheduled,
            ai_recommended: false,
            ai_reason_code: AiReasonCode::UsageThreshold,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn test_days_until_rounds_up() {
        assert_eq!(days_until(now() + Duration::hours(1), now()), 1);
        assert_eq!(days_until(now() + Duration::days(2), now()), 2);
        assert_eq!(days_until(now() + Duration::days(2) + Duration::minutes(1), now()), 3);
        assert_eq!(days_until(now(), now()), 0);
        // Less than a day in the past is still day zero.
        assert_eq!(days_until(now() - Duration::hours(12), now()), 0);
        assert_eq!(days_until(now() - Duration::hours(25), now()), -1);
    }

    #[test]
    fn test_classification_example() {
        let records = vec![
            record(1, now() - Duration::days(1), MaintenancePriority::Medium),
            record(2, now() + Duration::days(2), MaintenancePriority::Medium),
            record(3, now() + Duration::days(10), MaintenancePriority::Critical),
        ];
        let buckets = classify_alerts(&records, now());

        assert_eq!(buckets.overdue.len(), 1);
        assert_eq!(buckets.overdue[0].id, MaintenanceId::new(1));
        assert_eq!(buckets.overdue[0].days_until, -1);

        let critical: Vec<i64> = buckets.critical.iter().map(|a| a.id.value()).collect();
        assert_eq!(critical, vec![2, 3]);
        assert_eq!(buckets.critical[1].days_until, 10);

        assert!(buckets.upcoming.is_empty());
    }

    #[test]
    fn test_overdue_ignores_priority() {
        let records = vec![record(1, now() - Duration::days(5), MaintenancePriority::Critical)];
        let buckets = classify_alerts(&records, now());
        assert_eq!(buckets.overdue.len(), 1);
        assert!(buckets.critical.is_empty());
    }

    #[test]
    fn test_window_boundary() {
        let records = vec![
            record(1, now() + Duration::days(3), MaintenancePriority::Low),
            record(2, now() + Duration::days(3) + Duration::hours(1), MaintenancePriority::Low),
        ];
        let buckets = classify_alerts(&records, now());
        assert_eq!(buckets.critical.len(), 1);
        assert_eq!(buckets.critical[0].id.value(), 1);
        assert_eq!(buckets.upcoming.len(), 1);
        assert_eq!(buckets.upcoming[0].days_until, 4);
    }

    #[test]
    fn test_every_record_lands_in_one_bucket_in_input_order() {
        let records: Vec<MaintenanceRecord> = (0..20)
            .map(|i| {
                let priority = if i % 7 == 0 {
                    MaintenancePriority::Critical
                } else {
                    MaintenancePriority::Medium
                };
                record(i, now() + Duration::days(i - 6), priority)
            })
            .collect();
        let buckets = classify_alerts(&records, now());
        assert_eq!(buckets.total(), records.len());

        let mut seen: Vec<i64> = buckets
            .overdue
            .iter()
            .chain(&buckets.critical)
            .chain(&buckets.upcoming)
            .map(|a| a.id.value())
            .collect();
        seen.sort();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());

        let upcoming: Vec<i64> = buckets.upcoming.iter().map(|a| a.id.value()).collect();
        let mut sorted = upcoming.clone();
        sorted.sort();
        assert_eq!(upcoming, sorted);
    }

    #[test]
    fn test_empty_input() {
        let buckets = classify_alerts(&[], now());
        assert_eq!(buckets.total(), 0);
    }

    #[test]
    fn test_is_deterministic() {
        let records = vec![
            record(1, now() + Duration::days(8), MaintenancePriority::High),
            record(2, now() - Duration::days(2), MaintenancePriority::Low),
        ];
        assert_eq!(classify_alerts(&records, now()), classify_alerts(&records, now()));
    }
}
