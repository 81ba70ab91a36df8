use crate::error::TodoError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TaskId = i64;

/// Date format used on the wire and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
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

    /// Ranking contribution: higher priority sorts earlier
    pub fn value(&self) -> i64 {
        match self {
            Priority::High => -1,
            Priority::Medium => 0,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TodoError::InvalidPriority(s.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` date as typed by the user
pub fn parse_due_date(s: &str) -> Result<NaiveDate, TodoError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| TodoError::InvalidDate(s.to_string()))
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    #[serde(default, with = "due_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// Label of the action that flips the status
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Mark as Pending"
        } else {
            "Mark as Completed"
        }
    }

    pub fn due_date_label(&self) -> String {
        self.due_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Stored as a plain string where `""` means no due date.
mod due_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid dueDate {s:?}: {e}"))),
        }
    }
}

/// Fields supplied by the user when adding or editing a task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub task: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl TaskInput {
    pub fn new(task: impl Into<String>) -> Self {
        TaskInput {
            task: task.into(),
            ..Default::default()
        }
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// clap value parser for `--priority`
pub fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse::<Priority>().map_err(|e| e.to_string())
}

/// clap value parser for `--due` and `--today`
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_due_date(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_shape() {
        let task = Task {
            id: 3,
            task: "Buy milk".to_string(),
            due_date: Some(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()),
            priority: Priority::High,
            completed: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "task": "Buy milk",
                "dueDate": "2026-10-20",
                "priority": "high",
                "completed": false
            })
        );
    }

    #[test]
    fn test_empty_due_date_is_none() {
        let task: Task = serde_json::from_str(
            r#"{"id":1,"task":"x","dueDate":"","priority":"low","completed":true}"#,
        )
        .unwrap();
        assert_eq!(task.due_date, None);
        assert!(task.completed);
        assert_eq!(serde_json::to_value(&task).unwrap()["dueDate"], "");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let task: Task = serde_json::from_str(r#"{"id":1,"task":"x"}"#).unwrap();
        assert_eq!(task.priority, Priority::Low);
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(TodoError::InvalidPriority(_))
        ));
    }

    #[test]
    fn test_parse_due_date_rejects_garbage() {
        assert!(matches!(
            parse_due_date("next tuesday"),
            Err(TodoError::InvalidDate(_))
        ));
    }
}
