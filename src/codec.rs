//! Bidirectional transform between the persisted JSON schedule and the
//! in-memory day-key grid.
//!
//! The persisted form is a list of week objects with optional day buckets;
//! activities never carry an `id` on the wire; identity is re-minted on
//! every load. Validation happens at the boundary (`parse_document`), so
//! `decode` itself never fails on a validated document.

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ident::generate_activity_id;
use crate::model::{Activity, DayKey, Pillar, ScheduleState, Weekday};

/// Week count adopted when a document declares no weeks at all. A zero-week
/// schedule is not a valid operating state.
pub const DEFAULT_NUM_WEEKS: u32 = 12;

/// Root of the persisted/exported JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub weeks: Vec<WeekRecord>,
}

/// One week of the persisted schedule. Absent day fields mean "no
/// activities recorded for that day" and load as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRecord {
    pub week: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<DayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tue: Option<DayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wed: Option<DayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thu: Option<DayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fri: Option<DayRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat: Option<DayRecord>,
}

impl WeekRecord {
    pub fn new(week: u32) -> Self {
        Self {
            week,
            mon: None,
            tue: None,
            wed: None,
            thu: None,
            fri: None,
            sat: None,
        }
    }

    pub fn day(&self, day: Weekday) -> Option<&DayRecord> {
        match day {
            Weekday::Mon => self.mon.as_ref(),
            Weekday::Tue => self.tue.as_ref(),
            Weekday::Wed => self.wed.as_ref(),
            Weekday::Thu => self.thu.as_ref(),
            Weekday::Fri => self.fri.as_ref(),
            Weekday::Sat => self.sat.as_ref(),
        }
    }

    pub fn set_day(&mut self, day: Weekday, record: DayRecord) {
        let slot = match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
        };
        *slot = Some(record);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayRecord {
    pub activities: Vec<ActivityRecord>,
}

/// An activity as persisted: the in-memory shape minus `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub pillar: Pillar,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    pub is_field_trip: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub guest_speaker: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ActivityRecord {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            pillar: activity.pillar,
            name: activity.name.clone(),
            description: activity.description.clone(),
            skills: activity.skills.clone(),
            is_field_trip: activity.is_field_trip,
            guest_speaker: activity.guest_speaker,
        }
    }

    pub fn into_activity(self, id: String) -> Activity {
        Activity {
            id,
            pillar: self.pillar,
            name: self.name,
            description: self.description,
            skills: self.skills,
            is_field_trip: self.is_field_trip,
            guest_speaker: self.guest_speaker,
        }
    }
}

/// Schema violations detected before decode runs. Downcastable from the
/// `anyhow::Error` returned by [`parse_document`]; the message is suitable
/// for direct display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedSchedule {
    MissingWeeks,
    InvalidWeekNumber { index: usize },
}

impl fmt::Display for MalformedSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedSchedule::MissingWeeks => {
                write!(f, "Invalid schedule format: missing 'weeks' array.")
            }
            MalformedSchedule::InvalidWeekNumber { index } => {
                write!(
                    f,
                    "Invalid schedule format: week entry {index} must have a positive 'week' number."
                )
            }
        }
    }
}

impl std::error::Error for MalformedSchedule {}

/// Parses raw text into a validated document. The current schedule must be
/// left untouched by callers when this fails.
pub fn parse_document(raw: &str) -> Result<ScheduleDocument> {
    let value: Value =
        serde_json::from_str(raw).context("Schedule document is not well-formed JSON")?;
    validate_document(&value)?;
    let document = serde_json::from_value(value)
        .context("Schedule document does not match the expected schema")?;
    Ok(document)
}

fn validate_document(value: &Value) -> Result<()> {
    let weeks = value
        .get("weeks")
        .and_then(Value::as_array)
        .ok_or(MalformedSchedule::MissingWeeks)?;
    for (index, entry) in weeks.iter().enumerate() {
        match entry.get("week").and_then(Value::as_u64) {
            Some(week) if week >= 1 => {}
            _ => return Err(MalformedSchedule::InvalidWeekNumber { index }.into()),
        }
    }
    Ok(())
}

/// Expands a validated document into the in-memory grid.
///
/// The week count is the highest declared week number, or
/// [`DEFAULT_NUM_WEEKS`] when the document declares none. Every activity
/// gets a fresh id. The grid is pre-populated across the full week range,
/// so sparse documents and gaps in week numbering still yield a complete
/// grid; declared day buckets then overwrite their cells.
pub fn decode(document: &ScheduleDocument) -> ScheduleState {
    let num_weeks = document
        .weeks
        .iter()
        .map(|record| record.week)
        .max()
        .unwrap_or(DEFAULT_NUM_WEEKS);
    let mut state = ScheduleState::with_empty_weeks(num_weeks);
    for record in &document.weeks {
        for day in Weekday::ALL {
            if let Some(bucket) = record.day(day) {
                let activities = bucket
                    .activities
                    .iter()
                    .cloned()
                    .map(|activity| activity.into_activity(generate_activity_id()))
                    .collect();
                state.set_day(DayKey::new(record.week, day), activities);
            }
        }
    }
    state
}

/// Collapses the grid back into the persisted form.
///
/// Weeks are emitted ascending regardless of construction order; the
/// ordering is a contract of the format. Every day key present in the
/// state is emitted, an empty cell as `{"activities": []}`; ids are
/// stripped.
pub fn encode(state: &ScheduleState) -> ScheduleDocument {
    let mut weeks: std::collections::BTreeMap<u32, WeekRecord> = std::collections::BTreeMap::new();
    for (key, activities) in state.days() {
        let record = weeks
            .entry(key.week)
            .or_insert_with(|| WeekRecord::new(key.week));
        record.set_day(
            key.day,
            DayRecord {
                activities: activities.iter().map(ActivityRecord::from_activity).collect(),
            },
        );
    }
    ScheduleDocument {
        weeks: weeks.into_values().collect(),
    }
}
