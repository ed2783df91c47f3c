//! Listing and statistics views

use triage_core::domain::{OccupancyStatus, Priority};
use triage_integration_tests::test_registry;

#[test]
fn test_statistics_thresholds_capacity_five() {
    let mut registry = test_registry(1, 5);
    let status = |r: &triage_core::Registry| r.statistics()[0].status;

    assert_eq!(status(&registry), OccupancyStatus::Empty);

    let expected = [
        OccupancyStatus::Available,
        OccupancyStatus::Available,
        OccupancyStatus::Available,
        OccupancyStatus::Busy,
        OccupancyStatus::Full,
    ];
    for (i, want) in expected.into_iter().enumerate() {
        registry.admit(1, format!("p{}", i), Priority::Regular).unwrap();
        assert_eq!(status(&registry), want, "after {} admissions", i + 1);
    }
}

#[test]
fn test_statistics_rows_per_category() {
    let mut registry = test_registry(3, 5);
    registry.admit(2, "u", Priority::Urgent).unwrap();
    registry.admit(2, "r", Priority::Regular).unwrap();

    let stats = registry.statistics();
    let categories: Vec<usize> = stats.iter().map(|s| s.category).collect();
    assert_eq!(categories, vec![1, 2, 3]);

    let row = &stats[1];
    assert_eq!((row.urgent, row.regular, row.total), (1, 1, 2));
    assert_eq!(row.capacity, 5);
    assert_eq!(row.status, OccupancyStatus::Available);
}

#[test]
fn test_list_non_empty_skips_empty_categories() {
    let mut registry = test_registry(4, 5);
    assert!(registry.list_non_empty().is_empty());

    registry.admit(3, "c1", Priority::Regular).unwrap();
    registry.admit(1, "a1", Priority::Regular).unwrap();
    registry.admit(1, "a2", Priority::Urgent).unwrap();

    let listing = registry.list_non_empty();
    let categories: Vec<usize> = listing.iter().map(|s| s.category()).collect();
    assert_eq!(categories, vec![1, 3]);

    let names: Vec<&str> = listing[0].iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["a2", "a1"]);
}

#[test]
fn test_snapshot_is_stable_and_non_mutating() {
    let mut registry = test_registry(1, 5);
    for (name, priority) in [
        ("r1", Priority::Regular),
        ("u1", Priority::Urgent),
        ("r2", Priority::Regular),
    ] {
        registry.admit(1, name, priority).unwrap();
    }

    let first: Vec<String> = registry.list_non_empty()[0]
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    let second: Vec<String> = registry.list_non_empty()[0]
        .iter()
        .map(|p| p.name().to_string())
        .collect();

    assert_eq!(first, vec!["u1", "r1", "r2"]);
    assert_eq!(first, second);
    assert_eq!(registry.queue(1).unwrap().len(), 3);
    assert_eq!(registry.dispatch_next(1).unwrap().name(), "u1");
}

#[test]
fn test_views_serialize() {
    let mut registry = test_registry(2, 5);
    registry.admit(1, "Frank", Priority::Urgent).unwrap();

    let listing = serde_json::to_value(registry.list_non_empty()).unwrap();
    assert_eq!(listing[0]["category"], 1);
    assert_eq!(listing[0]["urgent"][0]["name"], "Frank");
    assert_eq!(listing[0]["urgent"][0]["priority"], "URGENT");

    let stats = serde_json::to_value(registry.statistics()).unwrap();
    assert_eq!(stats[0]["status"], "AVAILABLE");
    assert_eq!(stats[1]["status"], "EMPTY");
}
