//! Facade owning the live schedule, its undo history, and the workspace
//! adapters around them.
//!
//! The host application holds one `Planner` instance and threads it
//! through; tests instantiate fresh instances freely against a throwaway
//! workspace. Every mutation runs through the same discipline: snapshot
//! the prior state only when the operation actually changes something,
//! install the new state, append an event, refresh the storage mirror.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde_json::json;

use crate::codec;
use crate::config::{self, AppConfig};
use crate::events::{EventLog, EventType};
use crate::history::UndoHistory;
use crate::ident::generate_activity_id;
use crate::model::{Activity, ActivityDraft, DayKey, ScheduleState};
use crate::seed;
use crate::storage::{self, WorkspacePaths};

pub struct Planner {
    pub config: AppConfig,
    pub paths: WorkspacePaths,
    state: ScheduleState,
    history: UndoHistory,
    events: EventLog,
}

impl Planner {
    /// Ensures the workspace exists, loads config, then adopts the stored
    /// schedule. Absence or an unreadable mirror falls back to the seed;
    /// a load failure is logged, never fatal.
    pub fn new() -> Result<Self> {
        let paths = storage::ensure_workspace_structure()?;
        let config = config::load_or_default()?;
        let events = EventLog::for_workspace(&paths);

        let state = match storage::load_raw_schedule(&paths) {
            Ok(Some(raw)) => match codec::parse_document(&raw) {
                Ok(document) => {
                    let state = codec::decode(&document);
                    let _ = events.append(
                        EventType::ScheduleLoaded,
                        json!({ "num_weeks": state.num_weeks() }),
                    );
                    state
                }
                Err(err) => Self::seed_state(&events, err.to_string())?,
            },
            Ok(None) => Self::seed_state(&events, "no stored schedule".to_string())?,
            Err(err) => Self::seed_state(&events, err.to_string())?,
        };

        Ok(Self {
            config,
            paths,
            state,
            history: UndoHistory::new(),
            events,
        })
    }

    fn seed_state(events: &EventLog, reason: String) -> Result<ScheduleState> {
        let document = seed::seed_document()?;
        let state = codec::decode(&document);
        let _ = events.append(EventType::ScheduleSeeded, json!({ "reason": reason }));
        Ok(state)
    }

    pub fn schedule(&self) -> &ScheduleState {
        &self.state
    }

    pub fn num_weeks(&self) -> u32 {
        self.state.num_weeks()
    }

    /// Activities currently placed on `day`; empty for unknown keys.
    pub fn activities_on(&self, day: &DayKey) -> &[Activity] {
        self.state.day(day).unwrap_or(&[])
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Snapshot-before-mutate wrapper. Records history only when the
    /// transform applies; a no-op leaves both state and history untouched.
    fn apply<F>(&mut self, transform: F) -> bool
    where
        F: FnOnce(&ScheduleState) -> Option<ScheduleState>,
    {
        let Some(next) = transform(&self.state) else {
            return false;
        };
        self.history.record(self.state.clone());
        self.state = next;
        true
    }

    /// Relocates an activity between day cells (drop target ordering is
    /// "always last"). Returns false, and logs a diagnostic, when the
    /// activity is not where the caller thinks it is.
    pub fn move_activity(&mut self, target: &DayKey, activity_id: &str, source: &DayKey) -> bool {
        let applied = self.apply(|state| state.move_activity(target, activity_id, source));
        if applied {
            self.log_event(
                EventType::ActivityMoved,
                json!({
                    "activity_id": activity_id,
                    "from": source.to_string(),
                    "to": target.to_string(),
                }),
            );
            self.mirror_to_storage();
        } else {
            self.log_event(
                EventType::ActivityNotFound,
                json!({
                    "operation": "move",
                    "activity_id": activity_id,
                    "day": source.to_string(),
                }),
            );
        }
        applied
    }

    /// Creates an activity on `day` from a draft, minting its id. The name
    /// is validated here, at the creation boundary, not inside the grid.
    pub fn add_activity(&mut self, day: &DayKey, draft: ActivityDraft) -> Result<Activity> {
        if draft.name.trim().is_empty() {
            bail!("Activity name must not be empty.");
        }
        let activity = draft.into_activity(generate_activity_id());
        let applied = {
            let activity = activity.clone();
            self.apply(move |state| state.add_activity(day, activity))
        };
        if !applied {
            bail!("Day {} is outside the current schedule.", day);
        }
        self.log_event(
            EventType::ActivityAdded,
            json!({
                "activity_id": activity.id,
                "day": day.to_string(),
                "name": activity.name,
            }),
        );
        self.mirror_to_storage();
        Ok(activity)
    }

    /// Replaces an activity in place under the same id. Returns Ok(false)
    /// when the id is not present on `day`: a diagnostic, not an error.
    pub fn update_activity(&mut self, day: &DayKey, updated: Activity) -> Result<bool> {
        if updated.name.trim().is_empty() {
            bail!("Activity name must not be empty.");
        }
        let activity_id = updated.id.clone();
        let applied = self.apply(move |state| state.update_activity(day, updated));
        if applied {
            self.log_event(
                EventType::ActivityUpdated,
                json!({ "activity_id": activity_id, "day": day.to_string() }),
            );
            self.mirror_to_storage();
        } else {
            self.log_event(
                EventType::ActivityNotFound,
                json!({
                    "operation": "update",
                    "activity_id": activity_id,
                    "day": day.to_string(),
                }),
            );
        }
        Ok(applied)
    }

    /// Removes an activity by id; absent ids are a silent no-op apart from
    /// the diagnostic event.
    pub fn remove_activity(&mut self, day: &DayKey, activity_id: &str) -> bool {
        let applied = self.apply(|state| state.remove_activity(day, activity_id));
        if applied {
            self.log_event(
                EventType::ActivityRemoved,
                json!({ "activity_id": activity_id, "day": day.to_string() }),
            );
            self.mirror_to_storage();
        } else {
            self.log_event(
                EventType::ActivityNotFound,
                json!({
                    "operation": "remove",
                    "activity_id": activity_id,
                    "day": day.to_string(),
                }),
            );
        }
        applied
    }

    /// Appends a week to the grid. Returns the new week count.
    pub fn add_week(&mut self) -> u32 {
        self.apply(|state| Some(state.add_week()));
        let num_weeks = self.state.num_weeks();
        self.log_event(EventType::WeekAdded, json!({ "num_weeks": num_weeks }));
        self.mirror_to_storage();
        num_weeks
    }

    /// Removes the last week. Refuses with a [`crate::store::LastWeekGuard`]
    /// when only one week remains; no partial mutation occurs.
    pub fn remove_week(&mut self) -> Result<u32> {
        let next = self.state.remove_week()?;
        self.history.record(self.state.clone());
        self.state = next;
        let num_weeks = self.state.num_weeks();
        self.log_event(EventType::WeekRemoved, json!({ "num_weeks": num_weeks }));
        self.mirror_to_storage();
        Ok(num_weeks)
    }

    /// Restores the most recent snapshot. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo() else {
            return false;
        };
        self.state = previous;
        self.log_event(
            EventType::UndoApplied,
            json!({ "remaining": self.history.depth() }),
        );
        self.mirror_to_storage();
        true
    }

    /// Reinstalls the built-in seed and clears the undo history.
    pub fn reset(&mut self) -> Result<()> {
        let document = seed::seed_document()?;
        self.state = codec::decode(&document);
        self.history.clear();
        self.log_event(
            EventType::ScheduleReset,
            json!({ "num_weeks": self.state.num_weeks() }),
        );
        self.mirror_to_storage();
        Ok(())
    }

    /// Adopts a schedule from imported text. Validation failures are
    /// returned without touching the current state; on success the undo
    /// history is cleared, as with any wholesale reload.
    pub fn import_from_str(&mut self, raw: &str) -> Result<()> {
        let document = codec::parse_document(raw)?;
        self.state = codec::decode(&document);
        self.history.clear();
        self.log_event(
            EventType::ScheduleImported,
            json!({ "num_weeks": self.state.num_weeks() }),
        );
        self.mirror_to_storage();
        Ok(())
    }

    /// Serializes the current schedule in the persisted format, pretty by
    /// default (stable key order either way).
    pub fn export_string(&self) -> Result<String> {
        let document = codec::encode(&self.state);
        let raw = if self.config.export.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(raw)
    }

    /// Writes a date-stamped export into the workspace exports directory
    /// and returns its path.
    pub fn export_to_file(&self) -> Result<PathBuf> {
        let raw = self.export_string()?;
        let file_name = storage::export_file_name(
            &self.config.export.filename_prefix,
            Utc::now().date_naive(),
        );
        let path = self.paths.export_file(&file_name);
        fs::write(&path, raw)
            .with_context(|| format!("Failed to write export file {:?}", path))?;
        self.log_event(
            EventType::ScheduleExported,
            json!({ "path": path.display().to_string() }),
        );
        Ok(path)
    }

    fn log_event(&self, event_type: EventType, details: serde_json::Value) {
        let _ = self.events.append(event_type, details);
    }

    /// Refreshes the storage mirror. Failures are logged and reported, not
    /// retried; the in-memory state remains authoritative.
    fn mirror_to_storage(&self) {
        if !self.config.schedule.autosave {
            return;
        }
        if let Err(err) = self.write_mirror() {
            let _ = self.events.append(
                EventType::StorageWriteFailed,
                json!({ "error": err.to_string() }),
            );
        }
    }

    fn write_mirror(&self) -> Result<()> {
        let document = codec::encode(&self.state);
        let raw = serde_json::to_string_pretty(&document)?;
        storage::save_raw_schedule(&self.paths, &raw)
    }
}
