//! Document store for contacts and users
//!
//! The only supported backend is in-memory; the connection URL is still
//! parsed and validated at startup so a misconfigured deployment fails
//! before the server accepts traffic.

mod collection;
mod document;
mod error;

pub use collection::Collection;
pub use document::{Contact, User};
pub use error::StoreError;

use rolodex_config::StoreConfig;

/// Handle to the document store with one collection per resource
#[derive(Debug, Clone)]
pub struct Store {
    /// Contact documents
    pub contacts: Collection<Contact>,
    /// User documents
    pub users: Collection<User>,
}

impl Store {
    /// Open the store described by the configuration
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnsupportedScheme`] for anything other than
    /// a `memory://` URL
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        match config.url.split_once("://") {
            Some(("memory", _)) => {
                tracing::info!(url = %config.url, "document store connected");
                Ok(Self::in_memory())
            }
            _ => Err(StoreError::UnsupportedScheme {
                url: config.url.clone(),
            }),
        }
    }

    /// An empty in-memory store
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            contacts: Collection::new("contacts"),
            users: Collection::new("users"),
        }
    }
}
