//! Server infrastructure module.
//!
//! - Router assembly with API documentation, fallbacks and middleware
//! - Serving with graceful shutdown and bounded cleanup

pub mod app;
pub mod shutdown;

pub use app::{create_router, serve, serve_until};
pub use shutdown::shutdown_signal;
