//! Collection metadata types and the catalog trait

use crate::engine::{ImageCollection, ImageTransform};
use std::fmt;
use thiserror::Error;

/// Identifier a collection is registered under, e.g. `"landsat/lt05/sr"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionId(String);

impl CollectionId {
    /// Create a new collection identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CollectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Satellite family a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFamily {
    Landsat,
    Sentinel,
    Modis,
}

/// Processing level of a collection's imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessLevel {
    /// Top-of-atmosphere reflectance
    Toa,
    /// Surface reflectance
    Sr,
}

/// Metadata describing a registered image collection.
///
/// Consumed read-only by mask strategies: the native cloud mask and the
/// equivalent-collection identifier are both optional, and their absence
/// is a valid configuration, not an error.
#[derive(Clone)]
pub struct CollectionDescriptor<C: ImageCollection> {
    /// Identifier the collection is registered under
    pub id: CollectionId,
    /// Satellite family
    pub family: CollectionFamily,
    /// Processing level
    pub process_level: ProcessLevel,
    /// Handle to the remote collection
    pub collection: C,
    /// Collection-native cloud mask, when the catalog provides one
    pub cloud_mask: Option<ImageTransform<C::Image>>,
    /// Same-scene collection at another processing level, when one exists
    pub equivalent: Option<CollectionId>,
    /// Band carrying per-pixel cloud classification codes
    pub mask_band: String,
}

impl<C: ImageCollection> CollectionDescriptor<C> {
    /// Create a descriptor with no native cloud mask and no equivalent
    /// collection configured.
    pub fn new(
        id: impl Into<CollectionId>,
        family: CollectionFamily,
        process_level: ProcessLevel,
        collection: C,
        mask_band: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            family,
            process_level,
            collection,
            cloud_mask: None,
            equivalent: None,
            mask_band: mask_band.into(),
        }
    }

    /// Set the collection-native cloud mask transform.
    pub fn with_cloud_mask(mut self, mask: ImageTransform<C::Image>) -> Self {
        self.cloud_mask = Some(mask);
        self
    }

    /// Set the equivalent-collection identifier.
    pub fn with_equivalent(mut self, id: impl Into<CollectionId>) -> Self {
        self.equivalent = Some(id.into());
        self
    }
}

impl<C: ImageCollection> fmt::Debug for CollectionDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionDescriptor")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("process_level", &self.process_level)
            .field("cloud_mask", &self.cloud_mask.is_some())
            .field("equivalent", &self.equivalent)
            .field("mask_band", &self.mask_band)
            .finish_non_exhaustive()
    }
}

/// Registry resolving collection identifiers to their descriptors.
///
/// Mask strategies resolve through this trait once when a transform is
/// built, never per image, which keeps the dependency explicit and lets
/// tests substitute a fake catalog.
pub trait CollectionCatalog: Send + Sync {
    /// Remote collection handle type the catalog hands out.
    type Collection: ImageCollection;

    /// Resolves an identifier to its descriptor.
    fn resolve(
        &self,
        id: &CollectionId,
    ) -> Result<CollectionDescriptor<Self::Collection>, CatalogError>;
}

/// Catalog resolution errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// No collection is registered under the identifier
    #[error("unknown collection: {0}")]
    UnknownCollection(CollectionId),
}
