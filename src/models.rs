use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A to-do item as the backend sends it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub content: String,
    #[serde(default = "Priority::unknown")]
    pub priority: Priority,
    #[serde(default)]
    pub remind_at: Option<String>,
}

impl Task {
    pub fn key(&self) -> TaskKey {
        TaskKey {
            id: self.id,
            content: self.content.clone(),
        }
    }
}

/// Priority ordinal as carried on the wire. Only 1 and 2 have their own
/// bucket; every other value displays as High.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "i64")]
pub struct Priority(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const LOW: Priority = Priority(1);
    pub const MEDIUM: Priority = Priority(2);
    pub const HIGH: Priority = Priority(3);

    pub fn level(self) -> PriorityLevel {
        match self.0 {
            1 => PriorityLevel::Low,
            2 => PriorityLevel::Medium,
            _ => PriorityLevel::High,
        }
    }

    /// Parse a form value: a number, or one of `low`/`medium`/`high`.
    pub fn parse(value: &str) -> Option<Priority> {
        let value = value.trim();
        if let Ok(n) = value.parse::<i64>() {
            return Some(Priority(n));
        }
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(Priority::LOW),
            "medium" => Some(Priority::MEDIUM),
            "high" => Some(Priority::HIGH),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::MEDIUM
    }
}

impl From<Priority> for i64 {
    fn from(p: Priority) -> i64 {
        p.0
    }
}

// Never fails: a row with an odd priority still renders, in the High bucket.
// Only the numbers 1 and 2 are Low and Medium; "1", null or a name are not.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Priority::from_wire(&value))
    }
}

impl Priority {
    fn unknown() -> Priority {
        Priority::HIGH
    }

    fn from_wire(value: &Value) -> Priority {
        match value.as_f64() {
            Some(n) if n == 1.0 => Priority::LOW,
            Some(n) if n == 2.0 => Priority::MEDIUM,
            _ => value.as_i64().map(Priority).unwrap_or(Priority::HIGH),
        }
    }
}

impl PriorityLevel {
    /// Token used in the row's CSS class list.
    pub fn class_token(self) -> &'static str {
        match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
        }
    }
}

/// Identifies a task for deletion. The id wins when the backend sent one;
/// the content is always kept because the delete body carries it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub id: Option<u64>,
    pub content: String,
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "task-{id}"),
            None => write!(f, "task-{}", self.content),
        }
    }
}

/// Body of `POST /add_task`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddTaskRequest {
    pub content: String,
    pub priority: Priority,
    pub remind_at: Option<String>,
}

/// Body of `POST /delete_task`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteTaskRequest {
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl From<&TaskKey> for DeleteTaskRequest {
    fn from(key: &TaskKey) -> Self {
        DeleteTaskRequest {
            task: key.content.clone(),
            id: key.id,
        }
    }
}

/// Response of both endpoints: the complete current collection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}
