//! Manual mask placeholder.

use super::types::{MaskError, MaskStrategy};
use crate::catalog::CollectionDescriptor;
use crate::engine::{ImageCollection, ImageTransform};

/// Placeholder for a user-supplied mask.
///
/// Declared so pipelines can already name the strategy; building a
/// transform fails fast until an implementation lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualMask;

impl ManualMask {
    pub fn new() -> Self {
        Self
    }
}

impl<C: ImageCollection> MaskStrategy<C> for ManualMask {
    fn name(&self) -> &str {
        "manual"
    }

    fn build(
        &self,
        _collection: &CollectionDescriptor<C>,
    ) -> Result<ImageTransform<C::Image>, MaskError> {
        Err(MaskError::Unsupported("manual"))
    }
}
