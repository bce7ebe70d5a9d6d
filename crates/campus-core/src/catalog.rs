//! Searchable event catalog
//!
//! Events are stored in a [`SearchTree`] keyed by lowercased title and date,
//! so an exact lookup costs O(height). The other searches scan in key order.

pub mod tree;

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CampusError, Result};
use crate::tasks::Priority;

pub use tree::SearchTree;

/// Catalog key: lowercased title, then date
pub type CatalogKey = (String, NaiveDate);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub location: String,
    pub category: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogEvent {
    pub fn key(&self) -> CatalogKey {
        catalog_key(&self.title, self.date)
    }
}

/// Fields for a new catalog entry; the id is assigned on insert
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub category: String,
    pub priority: Priority,
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            time: None,
            location: String::new(),
            category: String::new(),
            priority: Priority::default(),
            description: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn catalog_key(title: &str, date: NaiveDate) -> CatalogKey {
    (title.trim().to_lowercase(), date)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone)]
pub struct EventCatalog {
    tree: SearchTree<CatalogKey, CatalogEvent>,
    next_id: u32,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self {
            tree: SearchTree::new(),
            next_id: 1,
        }
    }
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event, assigning the next `EVT_NNNN` id
    pub fn add(&mut self, draft: EventDraft) -> Result<&CatalogEvent> {
        let key = catalog_key(&draft.title, draft.date);
        if self.tree.contains(&key) {
            return Err(CampusError::DuplicateEvent {
                key: format!("{} on {}", draft.title, draft.date),
            });
        }

        let id = format!("EVT_{:04}", self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, title = %draft.title, date = %draft.date, "catalog_event_added");

        let event = CatalogEvent {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            category: draft.category,
            priority: draft.priority,
            description: draft.description,
        };
        self.tree.insert(key.clone(), event);
        self.tree
            .get(&key)
            .ok_or_else(|| CampusError::Other(format!("catalog insert lost {}", key.0)))
    }

    /// Exact lookup by title (case-insensitive) and date
    pub fn find(&self, title: &str, date: NaiveDate) -> Option<&CatalogEvent> {
        self.tree.get(&catalog_key(title, date))
    }

    fn filter(&self, predicate: impl Fn(&CatalogEvent) -> bool) -> Vec<&CatalogEvent> {
        self.tree
            .in_order()
            .into_iter()
            .map(|(_, event)| event)
            .filter(|event| predicate(event))
            .collect()
    }

    /// Title substring, case-insensitive
    pub fn search_by_title(&self, title: &str) -> Vec<&CatalogEvent> {
        self.filter(|event| contains_ignore_case(&event.title, title))
    }

    pub fn search_by_date(&self, date: NaiveDate) -> Vec<&CatalogEvent> {
        self.filter(|event| event.date == date)
    }

    pub fn search_by_category(&self, category: &str) -> Vec<&CatalogEvent> {
        self.filter(|event| event.category.eq_ignore_ascii_case(category.trim()))
    }

    pub fn search_by_priority(&self, priority: Priority) -> Vec<&CatalogEvent> {
        self.filter(|event| event.priority == priority)
    }

    /// Location substring, case-insensitive
    pub fn search_by_location(&self, location: &str) -> Vec<&CatalogEvent> {
        self.filter(|event| contains_ignore_case(&event.location, location))
    }

    /// Events dated within `start..=end`, ordered by date then title
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&CatalogEvent> {
        let mut events = self.filter(|event| (start..=end).contains(&event.date));
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.key().cmp(&b.key())));
        events
    }

    /// Events from `today` through `days` days ahead
    pub fn upcoming(&self, today: NaiveDate, days: u64) -> Vec<&CatalogEvent> {
        let end = today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.in_date_range(today, end)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEvent> {
        self.tree
            .in_order()
            .into_iter()
            .map(|(_, event)| event)
            .find(|event| event.id == id)
    }

    pub fn remove(&mut self, id: &str) -> Result<CatalogEvent> {
        let key = self
            .get(id)
            .map(CatalogEvent::key)
            .ok_or_else(|| CampusError::EventNotFound { id: id.to_string() })?;
        let event = self
            .tree
            .remove(&key)
            .ok_or_else(|| CampusError::EventNotFound { id: id.to_string() })?;
        tracing::debug!(%id, "catalog_event_removed");
        Ok(event)
    }

    /// Distinct non-empty categories, sorted
    pub fn categories(&self) -> Vec<String> {
        self.tree
            .in_order()
            .into_iter()
            .map(|(_, event)| event.category.clone())
            .filter(|category| !category.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct priorities in use, lowest first
    pub fn priorities(&self) -> Vec<Priority> {
        self.tree
            .in_order()
            .into_iter()
            .map(|(_, event)| event.priority)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every event in key order
    pub fn all(&self) -> Vec<&CatalogEvent> {
        self.filter(|_| true)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }
}
