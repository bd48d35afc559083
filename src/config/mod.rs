//! Application configuration: share-link origin and the seed cart.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SeedItem, ShareConfig};
