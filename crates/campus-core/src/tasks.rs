//! First-in first-out task queue with completion history

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::config::TasksConfig;
use crate::error::{CampusError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => bail_invalid!("priority (expected low, medium or high)", other),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
            deadline: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Queue counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub pending: usize,
    pub completed: usize,
    /// Every task ever accepted, including removed ones
    pub total_created: usize,
    /// Completed as a percentage of `total_created`, 0 when nothing was created
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    pending: VecDeque<Task>,
    completed: Vec<Task>,
    capacity: Option<usize>,
    total_created: usize,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn from_config(config: &TasksConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// Enqueue at the back
    pub fn add(&mut self, task: Task) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if self.pending.len() >= capacity {
                return Err(CampusError::QueueFull { capacity });
            }
        }
        tracing::debug!(title = %task.title, priority = %task.priority, "task_added");
        self.pending.push_back(task);
        self.total_created += 1;
        Ok(())
    }

    pub fn peek_next(&self) -> Option<&Task> {
        self.pending.front()
    }

    /// Dequeue the front task, stamp it completed and move it to history
    pub fn complete_next(&mut self) -> Option<&Task> {
        let mut task = self.pending.pop_front()?;
        task.completed_at = Some(Utc::now());
        tracing::debug!(title = %task.title, "task_completed");
        self.completed.push(task);
        self.completed.last()
    }

    /// Pending tasks front to back
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.pending.iter()
    }

    /// Completed tasks in completion order
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn clear_completed(&mut self) -> usize {
        let cleared = self.completed.len();
        self.completed.clear();
        cleared
    }

    /// Remove the first pending task with `title`
    pub fn remove(&mut self, title: &str) -> Option<Task> {
        let index = self.pending.iter().position(|task| task.title == title)?;
        self.pending.remove(index)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self.completed.len();
        let completion_rate = if self.total_created == 0 {
            0.0
        } else {
            completed as f64 / self.total_created as f64 * 100.0
        };
        TaskStats {
            pending: self.pending.len(),
            completed,
            total_created: self.total_created,
            completion_rate,
        }
    }
}
