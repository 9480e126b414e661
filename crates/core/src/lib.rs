//! Fleet maintenance domain logic.
//!
//! Pure, synchronous business rules shared by the API layer: maintenance
//! pricing and cost breakdowns, the timeline role-permission matrix, milestone
//! and template models, and request intake validation. Nothing in this crate
//! performs I/O.

pub mod cost;
pub mod error;
pub mod milestone;
pub mod permissions;
pub mod pricing;
pub mod request;
pub mod roles;
pub mod templates;
pub mod types;
pub mod vehicle;
