use thiserror::Error;
use uuid::Uuid;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with the given id exists in the collection
    #[error("no document with id {id} in {collection}")]
    NotFound {
        /// Collection name
        collection: &'static str,
        /// Requested document id
        id: Uuid,
    },

    /// Connection URL uses a scheme this build does not support
    #[error("unsupported store URL scheme: {url}")]
    UnsupportedScheme { url: String },
}
