//! Platform abstraction trait definitions

mod provider_factory;
mod secret_store;

pub use provider_factory::{BunnyProviderFactory, ProviderFactory};
pub use secret_store::{SecretData, SecretStore};
