//! Input validation helpers
//!
//! Text length limits and the boundary checks that turn loose request
//! payloads into the typed values the repository accepts.

use shared::models::{
    TaskContent, TaskContentUpdate, TaskCreate, TaskId, TaskPosition, TaskPositionUpdate,
};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Card titles
pub const MAX_TITLE_LEN: usize = 200;

/// Card descriptions
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Category tags ("todo", "inProgress", "done", ...)
pub const MAX_CATEGORY_LEN: usize = 100;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Take a required field out of a payload.
fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::required_field(field))
}

// ── Task payloads ───────────────────────────────────────────────────

/// Parse a task id from a path segment.
pub fn task_id(raw: &str) -> Result<TaskId, AppError> {
    raw.parse().map_err(|_| AppError::invalid_task_id(raw))
}

pub fn task_create(data: &TaskCreate) -> Result<(), AppError> {
    validate_optional_text(&data.title, "title", MAX_TITLE_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&data.category, "category", MAX_CATEGORY_LEN)?;
    Ok(())
}

/// Drag update: `category` and `order` are both required.
pub fn task_position(data: TaskPositionUpdate) -> Result<TaskPosition, AppError> {
    let category = required(data.category, "category")?;
    let order = required(data.order, "order")?;
    validate_required_text(&category, "category", MAX_CATEGORY_LEN)?;
    Ok(TaskPosition { category, order })
}

/// Full update: `title` and `description` are both required and non-empty.
pub fn task_content(data: TaskContentUpdate) -> Result<TaskContent, AppError> {
    let title = required(data.title, "title")?;
    let description = required(data.description, "description")?;
    validate_required_text(&title, "title", MAX_TITLE_LEN)?;
    validate_required_text(&description, "description", MAX_DESCRIPTION_LEN)?;
    Ok(TaskContent { title, description })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_task_id() {
        assert!(task_id("507f1f77bcf86cd799439011").is_ok());

        let err = task_id("not-a-valid-id-format").unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskIdInvalid);
    }

    #[test]
    fn test_task_position_requires_both_fields() {
        let err = task_position(TaskPositionUpdate {
            category: None,
            order: Some(1.into()),
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "category is required");

        let err = task_position(TaskPositionUpdate {
            category: Some("done".into()),
            order: None,
        })
        .unwrap_err();
        assert_eq!(err.message, "order is required");

        let err = task_position(TaskPositionUpdate {
            category: Some("  ".into()),
            order: Some(0.into()),
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let position = task_position(TaskPositionUpdate {
            category: Some("inProgress".into()),
            order: Some((-3).into()),
        })
        .unwrap();
        assert_eq!(position.category, "inProgress");
        assert_eq!(position.order.as_i64(), Some(-3));
    }

    #[test]
    fn test_task_content_requires_non_empty_fields() {
        let err = task_content(TaskContentUpdate {
            title: Some("t".into()),
            description: None,
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = task_content(TaskContentUpdate {
            title: Some(String::new()),
            description: Some("d".into()),
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "title must not be empty");

        let content = task_content(TaskContentUpdate {
            title: Some("t".into()),
            description: Some("d".into()),
        })
        .unwrap();
        assert_eq!(content.title, "t");
    }

    #[test]
    fn test_task_create_limits() {
        assert!(task_create(&TaskCreate::default()).is_ok());

        let long = TaskCreate {
            title: Some("x".repeat(MAX_TITLE_LEN + 1)),
            ..Default::default()
        };
        let err = task_create(&long).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "title");

        // limits count characters, not bytes
        let wide = TaskCreate {
            title: Some("看".repeat(MAX_TITLE_LEN)),
            ..Default::default()
        };
        assert!(task_create(&wide).is_ok());
    }
}
