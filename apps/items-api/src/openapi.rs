//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "Create, list, fetch, rename and delete items"
    ),
    nest(
        (path = "/api/items", api = domain_items::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
