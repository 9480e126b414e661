//! Request extractors for caller identity.
//!
//! - [`actor::Actor`] -- the calling actor's display name and role, as
//!   forwarded by the identity provider.

pub mod actor;
