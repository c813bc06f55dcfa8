//! Task Model
//!
//! A task is a card on the board. Its `category` picks the column and its
//! `order` the position inside that column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::util::{is_object_id, object_id};

/// Position inside a column: any JSON number, integral or fractional.
///
/// Fractions let a client drop a card between two neighbours
/// (1.5 between 1 and 2) without renumbering the column.
pub type TaskOrder = serde_json::Number;

/// Task identifier (24 lowercase hex chars, ObjectId layout)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

/// Rejected task identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task id: {0:?}")]
pub struct InvalidTaskId(pub String);

impl TaskId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(object_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaskId {
    type Err = InvalidTaskId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_object_id(s) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(InvalidTaskId(s.to_string()))
        }
    }
}

impl TryFrom<String> for TaskId {
    type Error = InvalidTaskId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Board columns (看板列)
///
/// `Task::category` stays a free string; only these three values are
/// listed by the grouped board query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Exact, case-sensitive match against the stored tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<TaskOrder>,
}

/// Create task payload
///
/// Every field is optional; `order` is only ever set through a drag update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Drag update payload (`PUT /tasks/drag/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPositionUpdate {
    pub category: Option<String>,
    pub order: Option<TaskOrder>,
}

/// Validated placement of a task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPosition {
    pub category: String,
    pub order: TaskOrder,
}

/// Full update payload (`PUT /tasks/modify/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskContentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Validated task content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContent {
    pub title: String,
    pub description: String,
}

/// Fields written by a full update, echoed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContentUpdated {
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub title: String,
    pub description: String,
}

/// Identifier of a removed task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDeleted {
    #[serde(rename = "_id")]
    pub id: TaskId,
}

/// Grouped board listing (`GET /tasks`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    pub todo: Vec<Task>,
    #[serde(rename = "inProgress")]
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskBoard {
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_parse() {
        let id: TaskId = "507F1F77BCF86CD799439011".parse().unwrap();
        assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");

        let err = "not-a-valid-id-format".parse::<TaskId>().unwrap_err();
        assert_eq!(err, InvalidTaskId("not-a-valid-id-format".to_string()));
    }

    #[test]
    fn test_task_id_generate_is_valid() {
        let id = TaskId::generate();
        assert_eq!(id.as_str().parse::<TaskId>().unwrap(), id);
    }

    #[test]
    fn test_task_id_deserialize_rejects_malformed() {
        let ok: TaskId = serde_json::from_str("\"507f1f77bcf86cd799439011\"").unwrap();
        assert_eq!(ok.to_string(), "507f1f77bcf86cd799439011");
        assert!(serde_json::from_str::<TaskId>("\"abc\"").is_err());
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(TaskCategory::from_tag("todo"), Some(TaskCategory::Todo));
        assert_eq!(
            TaskCategory::from_tag("inProgress"),
            Some(TaskCategory::InProgress)
        );
        assert_eq!(TaskCategory::from_tag("done"), Some(TaskCategory::Done));
        assert_eq!(TaskCategory::from_tag("in_progress"), None);
        assert_eq!(TaskCategory::from_tag("Done"), None);
        assert_eq!(
            serde_json::to_string(&TaskCategory::InProgress).unwrap(),
            "\"inProgress\""
        );
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task {
            id: "507f1f77bcf86cd799439011".parse().unwrap(),
            title: Some("Write docs".into()),
            description: None,
            category: Some("todo".into()),
            order: Some(2.into()),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "507f1f77bcf86cd799439011",
                "title": "Write docs",
                "category": "todo",
                "order": 2
            })
        );

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_position_order_accepts_fractions() {
        let update: TaskPositionUpdate =
            serde_json::from_str(r#"{"category":"done","order":1.5}"#).unwrap();
        assert_eq!(update.order.unwrap().as_f64(), Some(1.5));

        let update: TaskPositionUpdate =
            serde_json::from_str(r#"{"category":"done","order":3}"#).unwrap();
        assert_eq!(update.order.unwrap().as_i64(), Some(3));

        assert!(serde_json::from_str::<TaskPositionUpdate>(r#"{"order":"a0"}"#).is_err());
    }

    #[test]
    fn test_task_create_ignores_unknown_fields() {
        let create: TaskCreate =
            serde_json::from_str(r#"{"title":"a","category":"done","order":5,"extra":true}"#)
                .unwrap();
        assert_eq!(create.title.as_deref(), Some("a"));
        assert_eq!(create.category.as_deref(), Some("done"));
        assert!(create.description.is_none());
    }

    #[test]
    fn test_board_wire_format() {
        let board = TaskBoard::default();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "todo": [], "inProgress": [], "done": [] })
        );
        assert!(board.is_empty());
    }
}
