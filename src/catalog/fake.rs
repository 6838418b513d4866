//! Fake catalog for tests.

use super::types::{CatalogError, CollectionCatalog, CollectionDescriptor, CollectionId};
use crate::engine::fake::FakeCollection;
use std::collections::HashMap;

/// Fake catalog over a map of registered descriptors.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    collections: HashMap<CollectionId, CollectionDescriptor<FakeCollection>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its own identifier.
    pub fn with_collection(mut self, descriptor: CollectionDescriptor<FakeCollection>) -> Self {
        self.collections.insert(descriptor.id.clone(), descriptor);
        self
    }
}

impl CollectionCatalog for FakeCatalog {
    type Collection = FakeCollection;

    fn resolve(
        &self,
        id: &CollectionId,
    ) -> Result<CollectionDescriptor<FakeCollection>, CatalogError> {
        self.collections
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCollection(id.clone()))
    }
}
