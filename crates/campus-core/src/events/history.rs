use std::collections::VecDeque;

use super::Event;

/// One recorded structural change to the event list
#[derive(Debug, Clone)]
pub(super) enum Change {
    Inserted {
        position: usize,
        event: Event,
    },
    Removed {
        position: usize,
        event: Event,
    },
    Replaced {
        position: usize,
        before: Event,
        after: Event,
    },
}

impl Change {
    pub(super) fn kind(&self) -> &'static str {
        match self {
            Change::Inserted { .. } => "inserted",
            Change::Removed { .. } => "removed",
            Change::Replaced { .. } => "replaced",
        }
    }

    /// Perform the change again. Positions are valid for the list state the
    /// change was recorded against.
    pub(super) fn apply(&self, events: &mut Vec<Event>) {
        match self {
            Change::Inserted { position, event } => events.insert(*position, event.clone()),
            Change::Removed { position, .. } => {
                events.remove(*position);
            }
            Change::Replaced {
                position, after, ..
            } => events[*position] = after.clone(),
        }
    }

    pub(super) fn revert(&self, events: &mut Vec<Event>) {
        match self {
            Change::Inserted { position, .. } => {
                events.remove(*position);
            }
            Change::Removed { position, event } => events.insert(*position, event.clone()),
            Change::Replaced {
                position, before, ..
            } => events[*position] = before.clone(),
        }
    }
}

/// Stack of changes that forgets its oldest entry past `limit`
#[derive(Debug, Clone)]
pub(super) struct History {
    entries: VecDeque<Change>,
    limit: usize,
}

impl History {
    pub(super) fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub(super) fn push(&mut self, change: Change) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(change);
    }

    pub(super) fn pop(&mut self) -> Option<Change> {
        self.entries.pop_back()
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
