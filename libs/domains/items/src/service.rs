//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Validates names and checks that an item exists before update and delete.
/// The check and the write are separate store calls; a row removed in
/// between surfaces as [`ItemError::Database`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let name = input.into_name()?;
        self.repository.create(name).await
    }

    /// List every item in id order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Replace an item's name
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        let name = input.into_name()?;

        // Check if item exists
        self.get_item(id).await?;

        self.repository.update(id, name).await
    }

    /// Delete an item, returning it as it was
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<Item> {
        self.get_item(id).await?;
        self.repository.delete(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate::*;
    use sea_orm::DbErr;

    fn item(id: i32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_item_success() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_create()
            .with(eq("Widget".to_string()))
            .times(1)
            .returning(|name| Ok(item(1, &name)));

        let service = ItemService::new(mock_repo);
        let created = service.create_item(CreateItem::new("Widget")).await.unwrap();

        assert_eq!(created, item(1, "Widget"));
    }

    #[tokio::test]
    async fn test_create_item_missing_name_never_reaches_store() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_create().never();

        let service = ItemService::new(mock_repo);

        for input in [CreateItem::default(), CreateItem::new("")] {
            let result = service.create_item(input).await;
            assert!(matches!(result, Err(ItemError::NameRequired)));
        }
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(999999))
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        let result = service.get_item(999999).await;

        assert!(matches!(result, Err(ItemError::NotFound(999999))));
    }

    #[tokio::test]
    async fn test_list_items_passes_through() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![item(1, "a"), item(2, "b")]));

        let service = ItemService::new(mock_repo);
        assert_eq!(service.list_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_item_checks_existence_first() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ItemService::new(mock_repo);
        let result = service.update_item(3, UpdateItem::new("renamed")).await;

        assert!(matches!(result, Err(ItemError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_update_item_validates_before_lookup() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let service = ItemService::new(mock_repo);
        let result = service.update_item(3, UpdateItem::default()).await;

        assert!(matches!(result, Err(ItemError::NameRequired)));
    }

    #[tokio::test]
    async fn test_update_item_success() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(item(id, "old"))));
        mock_repo
            .expect_update()
            .with(eq(3), eq("new".to_string()))
            .times(1)
            .returning(|id, name| Ok(item(id, &name)));

        let service = ItemService::new(mock_repo);
        let updated = service.update_item(3, UpdateItem::new("new")).await.unwrap();

        assert_eq!(updated, item(3, "new"));
    }

    #[tokio::test]
    async fn test_delete_item_returns_removed_item() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(item(id, "gone"))));
        mock_repo
            .expect_delete()
            .with(eq(4))
            .times(1)
            .returning(|id| Ok(item(id, "gone")));

        let service = ItemService::new(mock_repo);
        assert_eq!(service.delete_item(4).await.unwrap(), item(4, "gone"));
    }

    #[tokio::test]
    async fn test_delete_item_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let service = ItemService::new(mock_repo);
        let result = service.delete_item(999999).await;

        assert!(matches!(result, Err(ItemError::NotFound(999999))));
    }

    #[tokio::test]
    async fn test_row_removed_after_check_is_store_fault() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(item(id, "racing"))));
        mock_repo
            .expect_delete()
            .returning(|_| Err(DbErr::RecordNotFound("item 5".to_string()).into()));

        let service = ItemService::new(mock_repo);
        let result = service.delete_item(5).await;

        assert!(matches!(result, Err(ItemError::Database(_))));
    }
}
