pub mod codec;
pub mod config;
pub mod events;
pub mod history;
pub mod ident;
pub mod model;
pub mod planner;
pub mod seed;
pub mod storage;
pub mod store;

// Re-export commonly used types for convenience.
pub use codec::{
    decode, encode, parse_document, MalformedSchedule, ScheduleDocument, DEFAULT_NUM_WEEKS,
};
pub use history::{UndoHistory, MAX_UNDO_DEPTH};
pub use ident::generate_activity_id;
pub use model::{Activity, ActivityDraft, DayKey, Pillar, ScheduleState, Weekday};
pub use planner::Planner;
pub use store::LastWeekGuard;
