use std::sync::Arc;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task};
use crate::repository::TaskRepository;
use crate::usecase::CreateTaskUseCase;

/// Entry point the HTTP handlers talk to.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
    create_task: CreateTaskUseCase<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        let repository = Arc::new(repository);
        Self {
            create_task: CreateTaskUseCase::new(Arc::clone(&repository)),
            repository,
        }
    }

    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        self.create_task.execute(input).await
    }

    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.find_all().await
    }

    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }
}
