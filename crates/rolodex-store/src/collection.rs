use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::error::StoreError;

/// A named collection of documents keyed by id
///
/// Cloning is cheap and clones share the same underlying map, so one
/// handle can live in router state while another seeds test fixtures.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    name: &'static str,
    documents: Arc<DashMap<Uuid, T>>,
}

impl<T: Clone> Collection<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: Arc::new(DashMap::new()),
        }
    }

    /// Insert a document under the given id, replacing any existing one
    pub fn insert(&self, id: Uuid, document: T) {
        self.documents.insert(id, document);
    }

    /// Fetch a document by id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no document has the id
    pub fn get(&self, id: Uuid) -> Result<T, StoreError> {
        self.documents
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound {
                collection: self.name,
                id,
            })
    }

    /// All documents in the collection, in unspecified order
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.documents.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Replace an existing document
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no document has the id;
    /// replace never creates
    pub fn replace(&self, id: Uuid, document: T) -> Result<(), StoreError> {
        match self.documents.get_mut(&id) {
            Some(mut entry) => {
                *entry.value_mut() = document;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: self.name,
                id,
            }),
        }
    }

    /// Remove a document, returning it
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no document has the id
    pub fn remove(&self, id: Uuid) -> Result<T, StoreError> {
        self.documents
            .remove(&id)
            .map(|(_, document)| document)
            .ok_or(StoreError::NotFound {
                collection: self.name,
                id,
            })
    }

    /// Number of documents in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
