//! Append-only JSONL diagnostics for the planner workspace.
//!
//! Every state transition and every non-fatal failure lands here so a
//! session can be reconstructed after the fact. Appends are best-effort
//! from the mutation path; a mutation never fails because its event could
//! not be written.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::WorkspacePaths;

/// Type of planner events that can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ScheduleSeeded,
    ScheduleLoaded,
    ScheduleImported,
    ScheduleExported,
    ScheduleReset,
    ActivityAdded,
    ActivityUpdated,
    ActivityMoved,
    ActivityRemoved,
    ActivityNotFound,
    WeekAdded,
    WeekRemoved,
    UndoApplied,
    StorageWriteFailed,
}

/// General-purpose planner event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerEvent {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

/// Wraps the workspace event log path.
pub struct EventLog {
    events_path: PathBuf,
}

impl EventLog {
    pub fn for_workspace(paths: &WorkspacePaths) -> Self {
        Self {
            events_path: paths.root.join("events.jsonl"),
        }
    }

    pub fn append(&self, event_type: EventType, details: serde_json::Value) -> Result<Uuid> {
        let event = PlannerEvent {
            event_id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            details,
        };
        self.append_event(&event)?;
        Ok(event.event_id)
    }

    pub fn append_event(&self, event: &PlannerEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<PlannerEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: PlannerEvent = serde_json::from_str(line)?;
            events.push(event);
        }
        Ok(events)
    }

    pub fn load_events_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<PlannerEvent>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|event| event.timestamp >= cutoff)
            .collect())
    }
}
