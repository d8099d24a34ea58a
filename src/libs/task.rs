//! The task record and the values used to create, change and count tasks.
//!
//! Input validation lives here as well ([`validate_title`],
//! [`parse_due_date`]): callers validate at the entry boundary and hand the
//! store data it can trust.

use chrono::{Local, NaiveDate};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calendar format used for due dates, in storage and on input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Local timestamp with second precision, e.g. `2025-09-05T14:03:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Rejected user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("Unknown priority '{0}', expected Low, Medium or High")]
    InvalidPriority(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A stored task.
///
/// `details` and `category` are `None` when empty. `due_date` is `None` when
/// the task has no deadline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub details: Option<String>,
    pub category: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub is_done: bool,
    pub order_index: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields supplied when creating a task. Identity, order and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub details: Option<String>,
    pub category: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = non_empty(details.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// A partial update. Only fields that are `Some` are written.
///
/// `due_date: Some(None)` clears the deadline. An empty `details` or
/// `category` string clears that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub details: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub is_done: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.details.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.is_done.is_none()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn done(mut self, is_done: bool) -> Self {
        self.is_done = Some(is_done);
        self
    }

    /// Builds the update that turns `task` into `edited`, keeping only the
    /// fields that actually differ.
    pub fn diff(task: &Task, edited: &NewTask) -> Self {
        let mut update = TaskUpdate::default();
        if task.title != edited.title {
            update.title = Some(edited.title.clone());
        }
        if task.details != edited.details {
            update.details = Some(edited.details.clone().unwrap_or_default());
        }
        if task.category != edited.category {
            update.category = Some(edited.category.clone().unwrap_or_default());
        }
        if task.priority != edited.priority {
            update.priority = Some(edited.priority);
        }
        if task.due_date != edited.due_date {
            update.due_date = Some(edited.due_date);
        }
        update
    }
}

/// Aggregate counts over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: i64,
    pub done: i64,
    pub active: i64,
    pub overdue: i64,
}

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Trims `title` and rejects it when nothing is left.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Parses a due date typed by the user. Blank input means "no deadline".
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(input.to_string()))
}

pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 1,
            title: "Write report".to_string(),
            details: None,
            category: Some("work".to_string()),
            priority: Priority::Medium,
            due_date: None,
            is_done: false,
            order_index: 1,
            created_at: "2025-09-01T10:00:00".to_string(),
            updated_at: "2025-09-01T10:00:00".to_string(),
        }
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Low ".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(ValidationError::InvalidPriority("urgent".to_string()))
        );
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(NewTask::new("x").priority, Priority::Medium);
    }

    #[test]
    fn title_is_trimmed_and_must_not_be_blank() {
        assert_eq!(validate_title("  Buy milk ").unwrap(), "Buy milk");
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn due_date_parsing() {
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("  ").unwrap(), None);
        assert_eq!(
            parse_due_date("2025-09-05").unwrap(),
            Some(NaiveDate::from_ymd_opt(2025, 9, 5).unwrap())
        );
        assert_eq!(
            parse_due_date("2025-02-30"),
            Err(ValidationError::InvalidDueDate("2025-02-30".to_string()))
        );
        assert!(parse_due_date("05.09.2025").is_err());
    }

    #[test]
    fn new_task_drops_empty_text() {
        let task = NewTask::new("x").details("").category("home");
        assert_eq!(task.details, None);
        assert_eq!(task.category, Some("home".to_string()));
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(TaskUpdate::default().is_empty());
        assert!(!TaskUpdate::default().done(true).is_empty());
        assert!(!TaskUpdate::default().due_date(None).is_empty());
    }

    #[test]
    fn diff_keeps_only_changed_fields() {
        let task = sample_task();
        let due = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
        let edited = NewTask::new("Write report")
            .category("work")
            .priority(Priority::High)
            .due_date(Some(due));

        let update = TaskUpdate::diff(&task, &edited);

        assert_eq!(update, TaskUpdate::default().priority(Priority::High).due_date(Some(due)));
    }

    #[test]
    fn diff_of_identical_task_is_empty() {
        let task = sample_task();
        let edited = NewTask::new("Write report").category("work");
        assert!(TaskUpdate::diff(&task, &edited).is_empty());
    }

    #[test]
    fn diff_clears_category() {
        let task = sample_task();
        let update = TaskUpdate::diff(&task, &NewTask::new("Write report"));
        assert_eq!(update.category, Some(String::new()));
    }
}
