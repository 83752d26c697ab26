use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, QueryOrder, Statement,
};

use crate::{entity, error::ItemResult, models::Item, repository::ItemRepository};

/// PostgreSQL implementation of ItemRepository
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, name: String) -> ItemResult<Item> {
        let model = entity::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Item::from))
    }

    async fn update(&self, id: i32, name: String) -> ItemResult<Item> {
        // UPDATE ... RETURNING; no matching row yields DbErr::RecordNotUpdated
        let model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(name),
        }
        .update(&self.db)
        .await?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ItemResult<Item> {
        let model = entity::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DbBackend::Postgres,
                r#"DELETE FROM "items" WHERE "id" = $1 RETURNING "id", "name""#,
                [id.into()],
            ))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("item {id}")))?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(model.into())
    }
}
