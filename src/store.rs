//! Mutation operations on the schedule grid.
//!
//! Each operation is a pure transform: it builds a complete new state
//! rather than mutating in place, and returns `None` when its
//! preconditions are not met so callers can skip snapshotting a no-op.

use std::fmt;

use crate::model::{Activity, DayKey, ScheduleState, Weekday};

/// Refusal raised when a mutation would remove the last remaining week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastWeekGuard;

impl fmt::Display for LastWeekGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cannot remove the last remaining week.")
    }
}

impl std::error::Error for LastWeekGuard {}

impl ScheduleState {
    /// Relocates `activity_id` from `source` to the end of `target`.
    ///
    /// `None` when the id is absent from `source` or either key lies
    /// outside the grid. Source equal to target is well-defined: the
    /// activity is re-appended at the end of its own day, a visible
    /// reorder.
    pub fn move_activity(
        &self,
        target: &DayKey,
        activity_id: &str,
        source: &DayKey,
    ) -> Option<ScheduleState> {
        if !self.days.contains_key(target) {
            return None;
        }
        let position = self
            .days
            .get(source)?
            .iter()
            .position(|activity| activity.id == activity_id)?;
        let mut next = self.clone();
        let moved = next.days.get_mut(source)?.remove(position);
        next.days.get_mut(target)?.push(moved);
        Some(next)
    }

    /// Filters `activity_id` out of `day`. `None` when absent, which makes
    /// repeated removal idempotent.
    pub fn remove_activity(&self, day: &DayKey, activity_id: &str) -> Option<ScheduleState> {
        let list = self.days.get(day)?;
        if !list.iter().any(|activity| activity.id == activity_id) {
            return None;
        }
        let mut next = self.clone();
        next.days
            .get_mut(day)?
            .retain(|activity| activity.id != activity_id);
        Some(next)
    }

    /// Appends `activity` to `day`. The caller is responsible for a fresh
    /// id; the grid does not deduplicate. `None` when `day` lies outside
    /// the grid, which would otherwise leave a stray key behind.
    pub fn add_activity(&self, day: &DayKey, activity: Activity) -> Option<ScheduleState> {
        if !self.days.contains_key(day) {
            return None;
        }
        let mut next = self.clone();
        next.days.get_mut(day)?.push(activity);
        Some(next)
    }

    /// Replaces the entry matching `updated.id` in `day`, preserving its
    /// position. `None` when not found.
    pub fn update_activity(&self, day: &DayKey, updated: Activity) -> Option<ScheduleState> {
        let position = self
            .days
            .get(day)?
            .iter()
            .position(|activity| activity.id == updated.id)?;
        let mut next = self.clone();
        next.days.get_mut(day)?[position] = updated;
        Some(next)
    }

    /// Grows the grid by one week, pre-populating its six day keys before
    /// the new count becomes authoritative. Existing weeks are untouched.
    pub fn add_week(&self) -> ScheduleState {
        let mut next = self.clone();
        next.num_weeks += 1;
        next.ensure_week(next.num_weeks);
        next
    }

    /// Shrinks the grid by dropping the highest week and its six day keys.
    /// Only the last week is removable; at least one week must remain.
    pub fn remove_week(&self) -> Result<ScheduleState, LastWeekGuard> {
        if self.num_weeks <= 1 {
            return Err(LastWeekGuard);
        }
        let mut next = self.clone();
        let week = next.num_weeks;
        for day in Weekday::ALL {
            next.days.remove(&DayKey::new(week, day));
        }
        next.num_weeks -= 1;
        Ok(next)
    }
}
