use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four-valued category an activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pillar {
    Ser,
    Pensar,
    Hacer,
    Social,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [Pillar::Ser, Pillar::Pensar, Pillar::Hacer, Pillar::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Ser => "Ser",
            Pillar::Pensar => "Pensar",
            Pillar::Hacer => "Hacer",
            Pillar::Social => "Social",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schedulable day of the week. The grid runs Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Display abbreviation, also the day component of a day key.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    /// Lowercase field name used in the persisted document.
    pub fn json_key(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
        }
    }

    pub fn from_abbrev(raw: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|day| day.abbrev() == raw)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Composite address of a single day cell in the schedule grid.
///
/// Renders as `W<week>-<abbrev>` (for example `W3-Wed`), which is the sole
/// addressing scheme into the schedule. Ordering is (week, day), so an
/// ordered map keyed by `DayKey` iterates in persisted-document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    pub week: u32,
    pub day: Weekday,
}

impl DayKey {
    pub fn new(week: u32, day: Weekday) -> Self {
        Self { week, day }
    }

    /// Parses the `W<week>-<abbrev>` grammar. Week numbers start at 1.
    pub fn parse(raw: &str) -> Option<DayKey> {
        let rest = raw.strip_prefix('W')?;
        let (week, day) = rest.split_once('-')?;
        let week: u32 = week.parse().ok()?;
        if week == 0 {
            return None;
        }
        let day = Weekday::from_abbrev(day)?;
        Some(DayKey::new(week, day))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}-{}", self.week, self.day.abbrev())
    }
}

/// A schedulable unit placed on a day.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Unique within a session, minted at creation or load. Never on the wire.
    pub id: String,
    pub pillar: Pillar,
    pub name: String,
    pub description: String,
    pub skills: Option<Vec<String>>,
    pub is_field_trip: bool,
    pub guest_speaker: bool,
}

/// An activity as entered at the creation boundary, before an id exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub pillar: Pillar,
    pub name: String,
    pub description: String,
    pub skills: Option<Vec<String>>,
    pub is_field_trip: bool,
    pub guest_speaker: bool,
}

impl ActivityDraft {
    pub fn new(pillar: Pillar, name: impl Into<String>) -> Self {
        Self {
            pillar,
            name: name.into(),
            description: String::new(),
            skills: None,
            is_field_trip: false,
            guest_speaker: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn field_trip(mut self) -> Self {
        self.is_field_trip = true;
        self
    }

    pub fn guest_speaker(mut self) -> Self {
        self.guest_speaker = true;
        self
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

/// The in-memory schedule: a complete day-key grid paired with its week
/// count, held as a single value so snapshots stay trivial.
///
/// Invariant: every key `W{1..num_weeks}-{Mon..Sat}` is present (possibly
/// empty) and no key outside that range survives a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub(crate) days: BTreeMap<DayKey, Vec<Activity>>,
    pub(crate) num_weeks: u32,
}

impl ScheduleState {
    /// Builds a schedule with `num_weeks` fully populated, empty weeks.
    pub fn with_empty_weeks(num_weeks: u32) -> Self {
        let mut state = Self {
            days: BTreeMap::new(),
            num_weeks,
        };
        for week in 1..=num_weeks {
            state.ensure_week(week);
        }
        state
    }

    pub fn num_weeks(&self) -> u32 {
        self.num_weeks
    }

    pub fn days(&self) -> &BTreeMap<DayKey, Vec<Activity>> {
        &self.days
    }

    pub fn day(&self, key: &DayKey) -> Option<&[Activity]> {
        self.days.get(key).map(Vec::as_slice)
    }

    pub fn contains_day(&self, key: &DayKey) -> bool {
        self.days.contains_key(key)
    }

    pub fn total_activities(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn find_activity(&self, key: &DayKey, activity_id: &str) -> Option<&Activity> {
        self.days
            .get(key)?
            .iter()
            .find(|activity| activity.id == activity_id)
    }

    pub(crate) fn set_day(&mut self, key: DayKey, activities: Vec<Activity>) {
        self.days.insert(key, activities);
    }

    /// Inserts the six day keys for `week` where not already present.
    pub(crate) fn ensure_week(&mut self, week: u32) {
        for day in Weekday::ALL {
            self.days.entry(DayKey::new(week, day)).or_default();
        }
    }
}
