use chrono::{DateTime, Local, NaiveDateTime};

use crate::models::{Task, TaskKey};

pub const NO_REMINDER: &str = "No reminder";

// Backend and `datetime-local` picker formats.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow {
    pub key: TaskKey,
    pub content: String,
    pub priority_class: &'static str,
    pub priority_label: &'static str,
    pub reminder: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let level = task.priority.level();
        TaskRow {
            key: task.key(),
            content: task.content.clone(),
            priority_class: level.class_token(),
            priority_label: level.label(),
            reminder: format_reminder(task.remind_at.as_deref()),
        }
    }
}

/// Parts of a rendered row a click can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPart {
    Text,
    Priority,
    Reminder,
    DeleteButton,
}

impl TaskRow {
    pub fn delete_target(&self, part: RowPart) -> Option<TaskKey> {
        (part == RowPart::DeleteButton).then(|| self.key.clone())
    }
}

pub fn render_rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::from).collect()
}

/// Unparseable values are shown verbatim.
pub fn format_reminder(remind_at: Option<&str>) -> String {
    let Some(raw) = remind_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return NO_REMINDER.to_string();
    };
    match parse_reminder(raw) {
        Some(local) => local.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_reminder(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
