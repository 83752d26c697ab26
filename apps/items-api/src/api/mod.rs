//! API routes module

use axum::Router;
use domain_items::{ItemRepository, ItemService, handlers};

/// Create all API routes (mounted under `/api` by the caller)
pub fn routes<R: ItemRepository + 'static>(repository: R) -> Router {
    let service = ItemService::new(repository);
    Router::new().nest("/items", handlers::router(service))
}
