use std::sync::Arc;

use crate::error::TaskResult;
use crate::models::{CreateTask, NewTask, Task};
use crate::repository::TaskRepository;

/// Validates the input and stores it as a new task.
pub struct CreateTaskUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for CreateTaskUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> CreateTaskUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, input), fields(title = %input.title))]
    pub async fn execute(&self, input: CreateTask) -> TaskResult<Task> {
        let new_task = NewTask::new(&input.title, input.description)?;
        self.repository.save(new_task).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::repository::{InMemoryTaskRepository, MockTaskRepository};

    fn input(title: &str, description: Option<&str>) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_execute_saves_once() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|task| Ok(task.into_task(5)));

        let use_case = CreateTaskUseCase::new(Arc::new(mock_repo));
        let task = use_case
            .execute(input("Estudar", Some("x")))
            .await
            .unwrap();

        assert_eq!(task.id, 5);
        assert_eq!(task.title, "Estudar");
        assert_eq!(task.description.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_title() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_save().never();

        let use_case = CreateTaskUseCase::new(Arc::new(mock_repo));
        let result = use_case.execute(input("  ", None)).await;

        assert!(matches!(result, Err(TaskError::Validation(_))));
    }

    #[tokio::test]
    async fn test_created_task_is_retrievable() {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let use_case = CreateTaskUseCase::new(Arc::clone(&repo));

        let task = use_case.execute(input("Ler", None)).await.unwrap();

        assert_eq!(repo.find_by_id(task.id).await.unwrap(), Some(task));
    }
}
