//! Custom extractors for Axum handlers.
//!
//! Rejections are reported as [`AppError`](crate::AppError) so they render
//! with the same envelope as every other error.

pub mod json_body;

pub use json_body::JsonBody;
