use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, User},
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository.
///
/// Name uniqueness is enforced by the `idx_users_name_unique` index; a
/// violation surfaces as [`UserError::Duplicate`].
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr, name: String) -> UserError {
    let sql_err = err.sql_err();
    classify_insert_error(sql_err, err, name)
}

/// `sql_err` is what the driver reported for `err`, if it recognised it.
fn classify_insert_error(sql_err: Option<SqlErr>, err: DbErr, name: String) -> UserError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::info!(%detail, "Unique index rejected user insert");
            UserError::Duplicate(name)
        }
        _ => {
            tracing::error!(error = %err, "Failed to insert user");
            UserError::from(err)
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: NewUser) -> UserResult<User> {
        let name = user.name().to_string();
        let active_model: entity::ActiveModel = user.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, name))?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }
}
