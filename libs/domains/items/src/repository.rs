use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// `update` and `delete` expect the row to exist; callers check first.
/// A missing row is reported as [`ItemError::Database`](crate::ItemError::Database),
/// like any other store failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert an item; the store assigns its id
    async fn create(&self, name: String) -> ItemResult<Item>;

    /// Every stored item, in ascending id order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Overwrite the name and return the updated item
    async fn update(&self, id: i32, name: String) -> ItemResult<Item>;

    /// Remove the item and return it as it was
    async fn delete(&self, id: i32) -> ItemResult<Item>;
}

/// In-memory implementation of ItemRepository (for testing/development)
///
/// Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<Store>>,
}

#[derive(Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, name: String) -> ItemResult<Item> {
        let mut state = self.state.write().await;

        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| DbErr::Custom("item id sequence exhausted".to_string()))?;
        let item = Item {
            id: state.last_id,
            name,
        };
        state.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let state = self.state.read().await;
        Ok(state.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn update(&self, id: i32, name: String) -> ItemResult<Item> {
        let mut state = self.state.write().await;
        let item = state.items.get_mut(&id).ok_or(DbErr::RecordNotUpdated)?;

        item.name = name;

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> ItemResult<Item> {
        let mut state = self.state.write().await;
        let item = state
            .items
            .remove(&id)
            .ok_or_else(|| DbErr::RecordNotFound(format!("item {id}")))?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemError;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create("first".to_string()).await.unwrap();
        let second = repo.create("second".to_string()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "second");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create("a".to_string()).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let next = repo.create("b".to_string()).await.unwrap();

        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn test_list_in_id_order() {
        let repo = InMemoryItemRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(name.to_string()).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create("old".to_string()).await.unwrap();

        let updated = repo.update(item.id, "new".to_string()).await.unwrap();
        assert_eq!(updated, Item { id: item.id, name: "new".to_string() });

        let deleted = repo.delete(item.id).await.unwrap();
        assert_eq!(deleted.name, "new");
        assert!(repo.get_by_id(item.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_rows_are_store_faults() {
        let repo = InMemoryItemRepository::new();

        assert!(matches!(
            repo.update(5, "x".to_string()).await,
            Err(ItemError::Database(_))
        ));
        assert!(matches!(repo.delete(5).await, Err(ItemError::Database(_))));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryItemRepository::new();
        let other = repo.clone();

        repo.create("shared".to_string()).await.unwrap();
        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
