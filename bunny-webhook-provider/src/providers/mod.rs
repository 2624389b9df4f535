//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod bunny;

pub use bunny::BunnyProvider;
