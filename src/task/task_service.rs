use crate::error::{AppError, Result};

use super::task_dto::TaskPayload;
use super::task_models::Task;
use super::task_repository::TaskRepository;

/// Service layer translating store lookups and payload validation into
/// API-level errors.
#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.repo.find_all().await
    }

    pub async fn get_task(&self, task_id: i64) -> Result<Task> {
        self.repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn create_task(&self, payload: TaskPayload) -> Result<Task> {
        payload.validate_payload(false)?;

        // validate_payload(false) guarantees title is present
        let title = payload.title.as_deref().unwrap_or_default();
        self.repo
            .create(
                title,
                payload.description.as_deref(),
                payload.completed.unwrap_or(false),
            )
            .await
    }

    pub async fn update_task(&self, task_id: i64, payload: TaskPayload) -> Result<Task> {
        // Lookup first so an unknown id reports 404 even when the
        // payload is also invalid.
        self.get_task(task_id).await?;
        payload.validate_payload(false)?;

        let title = payload.title.as_deref().unwrap_or_default();
        self.repo
            .replace(
                task_id,
                title,
                payload.description.as_deref(),
                payload.completed.unwrap_or(false),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn patch_task(&self, task_id: i64, payload: TaskPayload) -> Result<Task> {
        self.get_task(task_id).await?;
        payload.validate_payload(true)?;

        self.repo
            .patch(
                task_id,
                payload.title.as_deref(),
                payload.description.as_deref(),
                payload.completed,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn delete_task(&self, task_id: i64) -> Result<()> {
        let rows_affected = self.repo.delete(task_id).await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }

        Ok(())
    }
}
