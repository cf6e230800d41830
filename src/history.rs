use std::collections::VecDeque;

use crate::model::ScheduleState;

/// Maximum number of undo snapshots retained; the oldest is evicted
/// silently on overflow.
pub const MAX_UNDO_DEPTH: usize = 10;

/// Bounded stack of schedule snapshots, most recent first.
///
/// Callers record the state as it was immediately before a mutation.
/// Operations that change nothing must not be recorded; an undo step
/// indistinguishable from the current state is useless.
#[derive(Debug, Default)]
pub struct UndoHistory {
    snapshots: VecDeque<ScheduleState>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::new(),
        }
    }

    pub fn record(&mut self, snapshot: ScheduleState) {
        self.snapshots.push_front(snapshot);
        self.snapshots.truncate(MAX_UNDO_DEPTH);
    }

    /// Pops the most recent snapshot, or `None` when there is nothing to
    /// undo (surfaced to callers as a disabled action, not an error).
    pub fn undo(&mut self) -> Option<ScheduleState> {
        self.snapshots.pop_front()
    }

    /// Dropped wholesale on reset or import; undoing across a full reload
    /// is not supported.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
