use anyhow::Result;
use catapult::{ActivityDraft, DayKey, Pillar, ScheduleState, Weekday, MAX_UNDO_DEPTH};

use crate::{sample_activity, IntegrationHarness};

#[test]
fn history_is_bounded_and_undo_walks_back_in_order() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut planner = harness.planner();
    let mon = DayKey::new(1, Weekday::Mon);

    // 15 sequential mutations, remembering the state before each one.
    let mut before: Vec<ScheduleState> = Vec::new();
    for index in 0..15 {
        before.push(planner.schedule().clone());
        planner.add_activity(&mon, ActivityDraft::new(Pillar::Hacer, format!("Step {index}")))?;
    }

    assert_eq!(planner.undo_depth(), MAX_UNDO_DEPTH);

    // Undo restores the 10 most recent prior states, newest first.
    for expected in before.iter().rev().take(MAX_UNDO_DEPTH) {
        assert!(planner.undo());
        assert_eq!(planner.schedule(), expected);
    }
    assert!(!planner.undo(), "history must be exhausted after 10 undos");
    assert!(!planner.can_undo());
    Ok(())
}

#[test]
fn no_op_mutations_record_no_snapshot() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut planner = harness.planner();
    let mon = DayKey::new(1, Weekday::Mon);
    let tue = DayKey::new(1, Weekday::Tue);

    assert!(!planner.remove_activity(&mon, "ghost"));
    assert!(!planner.move_activity(&tue, "ghost", &mon));
    let phantom = sample_activity("ghost", Pillar::Ser, "Phantom");
    assert!(!planner.update_activity(&mon, phantom)?);

    assert_eq!(planner.undo_depth(), 0);
    assert!(!planner.undo());
    Ok(())
}

#[test]
fn undo_restores_a_move() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut planner = harness.planner();
    let mon = DayKey::new(1, Weekday::Mon);
    let tue = DayKey::new(1, Weekday::Tue);

    let activity = planner.add_activity(&mon, ActivityDraft::new(Pillar::Pensar, "Debate"))?;
    let before_move = planner.schedule().clone();

    assert!(planner.move_activity(&tue, &activity.id, &mon));
    assert!(planner.schedule().find_activity(&tue, &activity.id).is_some());

    assert!(planner.undo());
    assert_eq!(planner.schedule(), &before_move);
    assert!(planner.schedule().find_activity(&mon, &activity.id).is_some());
    assert!(planner.schedule().find_activity(&tue, &activity.id).is_none());
    Ok(())
}

#[test]
fn reset_clears_history() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut planner = harness.planner();
    let mon = DayKey::new(1, Weekday::Mon);

    planner.add_activity(&mon, ActivityDraft::new(Pillar::Ser, "Momentary"))?;
    assert!(planner.can_undo());

    planner.reset()?;
    assert!(!planner.can_undo());
    assert!(!planner.undo());
    Ok(())
}

#[test]
fn import_clears_history() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut planner = harness.planner();
    let mon = DayKey::new(1, Weekday::Mon);

    planner.add_activity(&mon, ActivityDraft::new(Pillar::Social, "Before import"))?;
    assert!(planner.can_undo());

    planner.import_from_str(r#"{"weeks":[{"week": 2}]}"#)?;
    assert_eq!(planner.num_weeks(), 2);
    assert!(!planner.can_undo());
    Ok(())
}
