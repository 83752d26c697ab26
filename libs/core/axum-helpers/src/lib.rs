//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly (docs, fallbacks, middleware) and graceful shutdown
//! - **[`errors`]**: The `{ message, errorCode? }` error envelope and its rendering
//! - **[`extractors`]**: Request extractors whose rejections use the error envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_router, serve};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     serve(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, BoxError, ErrorResponse};
pub use extractors::JsonBody;
pub use server::{create_router, serve, serve_until, shutdown_signal};
