//! Fleet maintenance API server library.
//!
//! Exposes the building blocks (config, error handling, extractors, routes, router)
//! so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
