use async_trait::async_trait;
use entity::employees::{self, Draft};
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, EntityTrait, PaginatorTrait,
    QueryOrder,
};
use tracing::instrument;

use crate::{DbPool, DbResult};

/// Persistence operations the employee endpoints rely on.
///
/// Each call maps to a single statement; nothing spans a transaction.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored employee, oldest first.
    async fn find_all(&self) -> DbResult<Vec<employees::Model>>;

    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>>;

    /// Insert when `draft.id` is `None`, otherwise update that row.
    async fn save(&self, draft: Draft) -> DbResult<employees::Model>;

    async fn exists_by_id(&self, id: i64) -> DbResult<bool>;

    async fn delete_by_id(&self, id: i64) -> DbResult<()>;
}

/// [`EmployeeRepository`] over a sea-orm connection pool.
#[derive(Clone, Debug)]
pub struct SeaOrmEmployees {
    pool: DbPool,
}

impl SeaOrmEmployees {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployees {
    #[instrument(name = "db.employees.find_all", skip_all)]
    async fn find_all(&self) -> DbResult<Vec<employees::Model>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    #[instrument(name = "db.employees.find_by_id", skip(self))]
    async fn find_by_id(&self, id: i64) -> DbResult<Option<employees::Model>> {
        let row = employees::Entity::find_by_id(id).one(&self.pool).await?;
        Ok(row)
    }

    #[instrument(name = "db.employees.save", skip_all, fields(id = ?draft.id))]
    async fn save(&self, draft: Draft) -> DbResult<employees::Model> {
        let model = employees::ActiveModel {
            id: draft.id.map_or(NotSet, Unchanged),
            name: Set(draft.name),
            location: Set(draft.location),
            department: Set(draft.department),
        };
        let saved = match draft.id {
            None => model.insert(&self.pool).await?,
            Some(_) => model.update(&self.pool).await?,
        };
        Ok(saved)
    }

    #[instrument(name = "db.employees.exists_by_id", skip(self))]
    async fn exists_by_id(&self, id: i64) -> DbResult<bool> {
        let count = employees::Entity::find_by_id(id).count(&self.pool).await?;
        Ok(count > 0)
    }

    #[instrument(name = "db.employees.delete_by_id", skip(self))]
    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        employees::Entity::delete_by_id(id).exec(&self.pool).await?;
        Ok(())
    }
}
