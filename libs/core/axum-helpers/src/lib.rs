//! # Axum Helpers
//!
//! Shared utilities for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: centralized failure-to-response translation with
//!   problem-detail JSON bodies
//! - **[`extractors`]**: custom extractors (integer id path segments)
//! - **[`health`]**: liveness endpoint
//! - **[`server`]**: server startup with graceful shutdown

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

// Re-export error types
pub use errors::{AppError, ProblemDetails};

// Re-export extractors
pub use extractors::IdPath;

// Re-export health types
pub use health::{HealthResponse, health_router};

// Re-export server entry points
pub use server::{create_app, shutdown_signal};
