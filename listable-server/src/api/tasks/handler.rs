//! Task API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::validation;
use crate::utils::{ApiResponse, AppError, AppJson, AppResult};
use shared::models::{
    Task, TaskBoard, TaskCategory, TaskContentUpdate, TaskContentUpdated, TaskCreate,
    TaskDeleted, TaskPositionUpdate,
};

/// POST /tasks - 创建任务
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<TaskCreate>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validation::task_create(&payload)?;
    let task = state.tasks.create(payload).await?;
    tracing::info!(id = %task.id, category = ?task.category, "Task created");
    if let Some(tag) = task.category.as_deref() {
        if TaskCategory::from_tag(tag).is_none() {
            tracing::debug!(
                id = %task.id,
                category = tag,
                "Category is not a board column, task only listed by /tasks/all"
            );
        }
    }
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks - 按列分组获取任务
pub async fn list_board(State(state): State<ServerState>) -> AppResult<Json<TaskBoard>> {
    let board = state.tasks.find_board().await?;
    tracing::debug!(count = board.len(), "Board listed");
    Ok(Json(board))
}

/// GET /tasks/all - 获取全部任务
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks.find_all().await?;
    Ok(Json(tasks))
}

/// PUT /tasks/drag/:id - 拖拽到新列/新位置
pub async fn drag(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<TaskPositionUpdate>,
) -> AppResult<Json<Task>> {
    let id = validation::task_id(&id)?;
    let position = validation::task_position(payload)?;

    let task = state
        .tasks
        .update_position(&id, position)
        .await?
        .ok_or_else(|| AppError::task_not_found(id.as_str()))?;
    Ok(Json(task))
}

/// PUT /tasks/modify/:id - 编辑标题和描述
pub async fn modify(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<TaskContentUpdate>,
) -> AppResult<ApiResponse<TaskContentUpdated>> {
    let id = validation::task_id(&id)?;
    let content = validation::task_content(payload)?;

    if !state.tasks.update_content(&id, content.clone()).await? {
        return Err(AppError::task_not_found(id.as_str()));
    }

    Ok(ApiResponse::success_with_message(
        "Task updated successfully",
        TaskContentUpdated {
            id,
            title: content.title,
            description: content.description,
        },
    ))
}

/// DELETE /tasks/:id - 删除任务
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<TaskDeleted>> {
    let id = validation::task_id(&id)?;

    if !state.tasks.delete(&id).await? {
        return Err(AppError::task_not_found(id.as_str()));
    }

    tracing::info!(id = %id, "Task deleted");
    Ok(ApiResponse::success_with_message(
        "Task deleted successfully",
        TaskDeleted { id },
    ))
}
