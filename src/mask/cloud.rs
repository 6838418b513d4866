//! Collection-native cloud mask strategy.

use super::types::{MaskError, MaskStrategy};
use crate::catalog::CollectionDescriptor;
use crate::engine::{identity, ImageCollection, ImageTransform};
use tracing::debug;

/// Applies the masking function the collection itself ships with.
///
/// Catalogs register a ready-made cloud mask for collections that have
/// one; this strategy hands it to the pipeline unchanged. Collections
/// without a native mask pass their images through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionCloudMask;

impl CollectionCloudMask {
    pub fn new() -> Self {
        Self
    }
}

impl<C: ImageCollection> MaskStrategy<C> for CollectionCloudMask {
    fn name(&self) -> &str {
        "cloud"
    }

    fn build(
        &self,
        collection: &CollectionDescriptor<C>,
    ) -> Result<ImageTransform<C::Image>, MaskError> {
        match &collection.cloud_mask {
            Some(mask) => Ok(mask.clone()),
            None => {
                debug!(collection = %collection.id, "no native cloud mask, images pass through");
                Ok(identity())
            }
        }
    }
}
