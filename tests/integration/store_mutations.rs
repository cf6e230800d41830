use catapult::codec::encode;
use catapult::{DayKey, Pillar, ScheduleState, Weekday};

use crate::sample_activity;

fn grid_with(activities: &[(&str, DayKey)]) -> ScheduleState {
    let mut state = ScheduleState::with_empty_weeks(12);
    for &(id, key) in activities {
        state = state
            .add_activity(&key, sample_activity(id, Pillar::Hacer, id))
            .unwrap();
    }
    state
}

#[test]
fn day_keys_parse_and_display_round_trip() {
    let key = DayKey::new(7, Weekday::Thu);
    assert_eq!(key.to_string(), "W7-Thu");
    assert_eq!(DayKey::parse("W7-Thu"), Some(key));
    assert_eq!(DayKey::parse("W0-Mon"), None);
    assert_eq!(DayKey::parse("W2-Sun"), None);
    assert_eq!(DayKey::parse("2-Mon"), None);
    assert_eq!(DayKey::parse("Wx-Mon"), None);
}

#[test]
fn move_preserves_total_count() {
    let mon = DayKey::new(1, Weekday::Mon);
    let tue = DayKey::new(1, Weekday::Tue);
    let state = grid_with(&[("a", mon), ("b", mon), ("c", tue)]);

    let moved = state.move_activity(&tue, "a", &mon).unwrap();

    assert_eq!(moved.total_activities(), state.total_activities());
    assert_eq!(moved.day(&mon).unwrap().len(), 1);
    assert_eq!(moved.day(&tue).unwrap().len(), 2);
    // Drop target ordering is "always last".
    assert_eq!(moved.day(&tue).unwrap()[1].id, "a");
}

#[test]
fn move_within_a_day_reorders_to_the_end() {
    let mon = DayKey::new(1, Weekday::Mon);
    let state = grid_with(&[("first", mon), ("second", mon)]);

    let moved = state.move_activity(&mon, "first", &mon).unwrap();

    let ids: Vec<&str> = moved
        .day(&mon)
        .unwrap()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, vec!["second", "first"]);
    assert_eq!(moved.total_activities(), 2);
}

#[test]
fn move_of_unknown_activity_is_a_no_op() {
    let mon = DayKey::new(1, Weekday::Mon);
    let tue = DayKey::new(1, Weekday::Tue);
    let state = grid_with(&[("a", mon)]);

    assert!(state.move_activity(&tue, "ghost", &mon).is_none());
    assert!(state.move_activity(&tue, "a", &tue).is_none());
}

#[test]
fn move_outside_the_grid_is_a_no_op() {
    let mon = DayKey::new(1, Weekday::Mon);
    let stray = DayKey::new(99, Weekday::Mon);
    let state = grid_with(&[("a", mon)]);

    assert!(state.move_activity(&stray, "a", &mon).is_none());
    assert!(state
        .add_activity(&stray, sample_activity("b", Pillar::Ser, "b"))
        .is_none());
}

#[test]
fn remove_is_idempotent() {
    let mon = DayKey::new(1, Weekday::Mon);
    let state = grid_with(&[("a", mon), ("b", mon)]);

    let once = state.remove_activity(&mon, "a").unwrap();
    assert_eq!(once.day(&mon).unwrap().len(), 1);
    // Second removal finds nothing; the caller keeps `once` unchanged.
    assert!(once.remove_activity(&mon, "a").is_none());
}

#[test]
fn update_replaces_in_place_preserving_position() {
    let mon = DayKey::new(1, Weekday::Mon);
    let state = grid_with(&[("a", mon), ("b", mon), ("c", mon)]);

    let mut renamed = sample_activity("b", Pillar::Pensar, "Renamed");
    renamed.description = "New description".to_string();
    let updated = state.update_activity(&mon, renamed.clone()).unwrap();

    let list = updated.day(&mon).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1], renamed);
    assert_eq!(list[0].id, "a");
    assert_eq!(list[2].id, "c");
}

#[test]
fn update_of_unknown_activity_is_a_no_op() {
    let mon = DayKey::new(1, Weekday::Mon);
    let tue = DayKey::new(1, Weekday::Tue);
    let state = grid_with(&[("a", mon)]);

    let elsewhere = sample_activity("a", Pillar::Ser, "Elsewhere");
    assert!(state.update_activity(&tue, elsewhere).is_none());
    assert!(state
        .update_activity(&mon, sample_activity("ghost", Pillar::Ser, "x"))
        .is_none());
}

#[test]
fn seeded_scenario_add_move_encode() {
    // 12 empty weeks. Add to W1-Mon, move to W1-Tue, then check the
    // persisted shape.
    let state = ScheduleState::with_empty_weeks(12);
    let mon = DayKey::new(1, Weekday::Mon);
    let tue = DayKey::new(1, Weekday::Tue);

    let state = state
        .add_activity(&mon, sample_activity("x", Pillar::Hacer, "Lab"))
        .unwrap();
    let state = state.move_activity(&tue, "x", &mon).unwrap();

    assert!(state.day(&mon).unwrap().is_empty());
    let tue_list = state.day(&tue).unwrap();
    assert_eq!(tue_list.len(), 1);
    assert_eq!(tue_list[0].id, "x");

    let value = serde_json::to_value(encode(&state)).unwrap();
    let week_one = &value["weeks"][0];
    assert_eq!(week_one["week"], 1);
    assert_eq!(
        week_one["tue"]["activities"],
        serde_json::json!([{
            "pillar": "Hacer",
            "name": "Lab",
            "description": "",
            "isFieldTrip": false
        }])
    );
    // Empty-but-declared days are retained as empty activity lists.
    assert_eq!(week_one["mon"]["activities"], serde_json::json!([]));
}
