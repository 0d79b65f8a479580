use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{error::Result, state::AppState};

use super::{task_dto::TaskPayload, task_models::Task};

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>)
    ),
    tag = "tasks"
)]
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Validation failed")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<impl IntoResponse> {
    let task = state.task_service.create_task(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a single task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<Task>> {
    let task = state.task_service.get_task(task_id).await?;
    Ok(Json(task))
}

/// Replace a task (PUT - full update)
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>> {
    let task = state.task_service.update_task(task_id, payload).await?;
    Ok(Json(task))
}

/// Merge fields into a task (PATCH - partial update, typically the
/// completed flag)
#[utoipa::path(
    patch,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn patch_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>> {
    let task = state.task_service.patch_task(task_id, payload).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<StatusCode> {
    state.task_service.delete_task(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
