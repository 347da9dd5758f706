#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod server;
pub mod store;

use serde::Deserialize;

pub use server::{HealthConfig, ServerConfig};
pub use store::StoreConfig;

/// Top-level rolodex configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Deployment environment label, logged at startup
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            environment: default_environment(),
        }
    }
}

fn default_environment() -> String {
    "development".to_owned()
}
