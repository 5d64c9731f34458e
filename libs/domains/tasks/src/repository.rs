use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{NewTask, Task};

/// Repository trait for Task persistence
///
/// Implementations can use different storage backends (stub, memory, PostgreSQL).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a new task and return it with its assigned id
    async fn save(&self, task: NewTask) -> TaskResult<Task>;

    /// All tasks ordered by id
    async fn find_all(&self) -> TaskResult<Vec<Task>>;

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<Task>>;
}

const STUB_TASK_ID: i32 = 1;
const STUB_TASK_TITLE: &str = "Tarefa 1";

/// Fixed-response repository used while no real storage is wired.
///
/// `save` echoes the input back with id 1 and stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubTaskRepository;

impl StubTaskRepository {
    pub fn new() -> Self {
        Self
    }

    fn canned() -> Task {
        Task {
            id: STUB_TASK_ID,
            title: STUB_TASK_TITLE.to_string(),
            description: None,
        }
    }
}

#[async_trait]
impl TaskRepository for StubTaskRepository {
    async fn save(&self, task: NewTask) -> TaskResult<Task> {
        tracing::debug!(title = task.title(), "Stub repository echoing task");
        Ok(task.into_task(STUB_TASK_ID))
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        Ok(vec![Self::canned()])
    }

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        Ok((id == STUB_TASK_ID).then(Self::canned))
    }
}

#[derive(Debug, Default)]
struct Tasks {
    next_id: i32,
    by_id: BTreeMap<i32, Task>,
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Tasks>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: NewTask) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;

        tasks.next_id += 1;
        let task = task.into_task(tasks.next_id);
        tasks.by_id.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.by_id.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str) -> NewTask {
        NewTask::new(title, None).unwrap()
    }

    #[tokio::test]
    async fn test_stub_echoes_input_with_fixed_id() {
        let repo = StubTaskRepository::new();

        let task = repo
            .save(NewTask::new("Estudar", Some("x".into())).unwrap())
            .await
            .unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Estudar");
        assert_eq!(task.description.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_stub_lists_canned_task() {
        let repo = StubTaskRepository::new();
        repo.save(new_task("ignored")).await.unwrap();

        let tasks = repo.find_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Tarefa 1");
        assert!(repo.find_by_id(1).await.unwrap().is_some());
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_assigns_sequential_ids() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.save(new_task("a")).await.unwrap();
        let second = repo.save(new_task("b")).await.unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_in_memory_find_by_id() {
        let repo = InMemoryTaskRepository::new();
        let saved = repo.save(new_task("Estudar")).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_in_memory_concurrent_saves_get_distinct_ids() {
        let repo = InMemoryTaskRepository::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(new_task(&format!("t{i}"))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
