//! Items API - REST service for the items domain
//!
//! The binary wires [`build_app`] to a PostgreSQL-backed repository; tests
//! pass an [`InMemoryItemRepository`](domain_items::InMemoryItemRepository).

pub mod api;
pub mod config;
pub mod openapi;

use axum::Router;
use domain_items::ItemRepository;

/// Assemble the full application around `repository`.
///
/// Item routes live under `/api/items`; docs, the root redirect, the
/// catch-all 404 and the middleware stack come from
/// [`axum_helpers::create_router`].
pub fn build_app<R>(repository: R) -> Router
where
    R: ItemRepository + 'static,
{
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(repository))
}
