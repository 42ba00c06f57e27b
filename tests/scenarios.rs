//! End-to-end scheduling scenarios over network snapshots.

use serde_json::json;

use stn_schedule::models::{Interval, Slot, TemporalNetwork, TimeUnit};
use stn_schedule::scheduler::{
    check_conflicts, find_free_slots, find_next_available_slot, free_slots_among,
    get_overlapping_intervals,
};
use stn_schedule::validation::validate_network;
use stn_schedule::{IntervalScheduler, SchedulerConfig, SchedulerError};

fn hero_day() -> TemporalNetwork {
    serde_json::from_value(json!({
        "time_points": [
            "train_start", "train_end",
            "scout_start", "scout_end",
            "feast_start",
            "origin"
        ],
        "constraints": [
            {"from": "train_start", "to": "train_end", "bound": 120},
            {"from": "scout_start", "to": "scout_end", "bound": [60, 180]},
            {"from": "origin", "to": "train_start", "bound": 30}
        ],
        "metadata": {
            "train": {"hero": "aria", "skill": "sword"},
            "scout": {"hero": "bram"}
        },
        "time_unit": "minute"
    }))
    .unwrap()
}

#[test]
fn separated_intervals_yield_gap_and_trailing_slots() {
    let occupied = vec![Interval::new("A", 0, 100), Interval::new("B", 150, 200)];
    let slots = free_slots_among(&occupied, 40, 0, 300).unwrap();
    assert_eq!(slots, vec![Slot::new(100, 140), Slot::new(200, 240)]);
}

#[test]
fn empty_network_exact_fit() {
    let stn = TemporalNetwork::new(TimeUnit::Millisecond);
    assert_eq!(
        find_free_slots(&stn, 500, 0, 500).unwrap(),
        vec![Slot::new(0, 500)]
    );
}

#[test]
fn interval_covering_window_leaves_nothing() {
    let stn = TemporalNetwork::new(TimeUnit::Millisecond).with_interval("siege", 1_000);
    assert!(find_free_slots(&stn, 1, 0, 1_000).unwrap().is_empty());
}

#[test]
fn inverted_query_is_invalid() {
    let stn = hero_day();
    assert!(matches!(
        get_overlapping_intervals(&stn, 10, 5),
        Err(SchedulerError::InvalidInput(_))
    ));
}

#[test]
fn duration_longer_than_window_is_invalid() {
    let stn = hero_day();
    assert!(matches!(
        find_free_slots(&stn, 50, 0, 30),
        Err(SchedulerError::InvalidInput(_))
    ));
}

#[test]
fn fully_booked_horizon_has_no_slot() {
    let stn = TemporalNetwork::new(TimeUnit::Day).with_interval("war", 365);
    let err = find_next_available_slot(&stn, 1, 100, &SchedulerConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SchedulerError::NoAvailableSlot {
            earliest_start: 100,
            horizon: 30
        }
    ));
}

#[test]
fn hero_day_queries() {
    let stn = hero_day();

    // train = [0,120], scout = [0,120] (midpoint of 60..180)
    let conflicts = check_conflicts(&stn, 100, 130).unwrap();
    let ids: Vec<&str> = conflicts.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["scout", "train"]);
    assert_eq!(conflicts[1].metadata["skill"], json!("sword"));

    assert!(check_conflicts(&stn, 121, 200).unwrap().is_empty());

    let scheduler = IntervalScheduler::new(&stn);
    assert_eq!(
        scheduler.find_next_available_slot(45, 0).unwrap(),
        Slot::new(120, 165)
    );
}

#[test]
fn hero_day_validation_reports_dangling_feast() {
    let errors = validate_network(&hero_day()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("feast_start"));
}

#[test]
fn horizon_from_toml_config() {
    let stn = TemporalNetwork::new(TimeUnit::Hour).with_interval("vigil", 48);
    let config = SchedulerConfig::from_toml_str("horizon_days = 1").unwrap();

    let scheduler = IntervalScheduler::new(&stn).with_config(config);
    assert_eq!(scheduler.horizon(), 24);
    assert!(matches!(
        scheduler.find_next_available_slot(1, 0),
        Err(SchedulerError::NoAvailableSlot { horizon: 24, .. })
    ));
    assert_eq!(
        scheduler.find_next_available_slot(1, 48).unwrap(),
        Slot::new(48, 49)
    );
}
