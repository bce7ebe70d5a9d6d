//! Campus event log with undo/redo
//!
//! Every structural change records its inverse on a bounded undo history.
//! Undoing moves the entry to the redo history; any new change clears it.

mod history;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{EventsConfig, DEFAULT_HISTORY_LIMIT};
use crate::error::{CampusError, Result};
use history::{Change, History};

/// A scheduled campus event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            time: None,
            location: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case-insensitive keyword match on title, description or location
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Ordered event list with bounded undo and redo histories
#[derive(Debug, Clone)]
pub struct EventLog {
    events: Vec<Event>,
    undo: History,
    redo: History,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn from_config(config: &EventsConfig) -> Self {
        Self::with_history_limit(config.history_limit)
    }

    /// Histories keep at most `limit` entries, dropping the oldest
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            undo: History::new(limit),
            redo: History::new(limit),
        }
    }

    pub fn add(&mut self, event: Event) {
        let position = self.events.len();
        self.events.push(event.clone());
        self.record(Change::Inserted { position, event });
    }

    /// Insert before `position`; `position == len` appends
    pub fn insert(&mut self, position: usize, event: Event) -> Result<()> {
        if position > self.events.len() {
            return Err(self.out_of_range(position));
        }
        self.events.insert(position, event.clone());
        self.record(Change::Inserted { position, event });
        Ok(())
    }

    pub fn delete(&mut self, position: usize) -> Result<Event> {
        if position >= self.events.len() {
            return Err(self.out_of_range(position));
        }
        let event = self.events.remove(position);
        self.record(Change::Removed {
            position,
            event: event.clone(),
        });
        Ok(event)
    }

    /// Replace the event at `position`, returning the previous one
    pub fn edit(&mut self, position: usize, event: Event) -> Result<Event> {
        if position >= self.events.len() {
            return Err(self.out_of_range(position));
        }
        let before = std::mem::replace(&mut self.events[position], event.clone());
        self.record(Change::Replaced {
            position,
            before: before.clone(),
            after: event,
        });
        Ok(before)
    }

    pub fn undo(&mut self) -> Result<()> {
        let change = self.undo.pop().ok_or(CampusError::NothingToUndo)?;
        change.revert(&mut self.events);
        tracing::debug!(change = change.kind(), "event_change_undone");
        self.redo.push(change);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        let change = self.redo.pop().ok_or(CampusError::NothingToRedo)?;
        change.apply(&mut self.events);
        tracing::debug!(change = change.kind(), "event_change_redone");
        self.undo.push(change);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, position: usize) -> Option<&Event> {
        self.events.get(position)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events matching `keyword`, in list order
    pub fn search(&self, keyword: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.matches(keyword))
            .collect()
    }

    fn record(&mut self, change: Change) {
        tracing::debug!(change = change.kind(), len = self.events.len(), "event_change");
        self.undo.push(change);
        self.redo.clear();
    }

    fn out_of_range(&self, position: usize) -> CampusError {
        CampusError::PositionOutOfRange {
            position,
            len: self.events.len(),
        }
    }
}
