use serde::Deserialize;

/// Document store configuration
///
/// The URL is parsed and validated by the store crate when the connection
/// is opened, before the server starts accepting traffic.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store connection URL; only the `memory://` scheme is supported
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    "memory://".to_owned()
}
