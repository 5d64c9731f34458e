use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::TaskResult,
    models::{NewTask, Task},
    repository::TaskRepository,
};

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn save(&self, task: NewTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = task.into();
        let model = active_model.insert(&self.db).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to insert task");
        })?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }
}
