//! HTTP API application wiring (Axum router + registry wiring).
//!
//! - `services.rs`: the shared registry handle handed to every handler
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request body decoding and response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use usuarios_core::UserRegistry;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a freshly seeded registry.
pub fn build_app() -> Router {
    build_app_with(UserRegistry::seeded())
}

/// Build the router over a caller-supplied registry (tests/dev).
pub fn build_app_with(registry: UserRegistry) -> Router {
    let services = Arc::new(services::AppServices::new(registry));

    routes::router().layer(Extension(services))
}
