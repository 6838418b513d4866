//! Mask strategy trait and errors

use crate::catalog::{CatalogError, CollectionDescriptor, CollectionId};
use crate::engine::{ImageCollection, ImageTransform};
use thiserror::Error;

/// Strategy for suppressing cloud and cloud-shadow pixels.
///
/// A strategy turns a collection's metadata into the per-image transform
/// the compositing pipeline maps across that collection's time series.
/// [`build`](MaskStrategy::build) is deterministic given the descriptor
/// and has no side effects beyond assembling backend expressions, so it is
/// safe to call repeatedly and from several threads.
pub trait MaskStrategy<C: ImageCollection>: Send + Sync {
    /// Returns the strategy's name for logging and identification.
    fn name(&self) -> &str;

    /// Builds the per-image transform for `collection`.
    fn build(
        &self,
        collection: &CollectionDescriptor<C>,
    ) -> Result<ImageTransform<C::Image>, MaskError>;
}

/// Errors raised while building a mask transform.
///
/// Absent optional metadata (no native mask, no equivalent collection) is
/// handled by falling back to the identity transform and never surfaces
/// here; these variants cover genuine misconfiguration, which must reach
/// the caller rather than silently degrade composite quality.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A configured equivalent collection failed to resolve
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A resolved descriptor lacks a field the strategy needs
    #[error("collection {id}: missing required metadata `{field}`")]
    MissingMetadata {
        id: CollectionId,
        field: &'static str,
    },

    /// The strategy is declared but not implemented
    #[error("{0} masking is not supported")]
    Unsupported(&'static str),
}
