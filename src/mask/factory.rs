//! Mask strategy factory for centralized strategy selection.
//!
//! The compositing pipeline picks a strategy per run; the factory keeps
//! that choice to a configuration value and hands out boxed strategies
//! wired with the catalog they need.

use super::cloud::CollectionCloudMask;
use super::equivalent::EquivalentMask;
use super::manual::ManualMask;
use super::types::MaskStrategy;
use crate::catalog::CollectionCatalog;

/// Selects which mask strategy the compositing pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskConfig {
    /// Use the collection's own cloud mask when present.
    Cloud,

    /// Borrow the classification band from the equivalent collection.
    Equivalent,

    /// User-supplied mask (not implemented).
    Manual,
}

impl MaskConfig {
    /// Returns the strategy name for this configuration.
    pub fn name(&self) -> &str {
        match self {
            Self::Cloud => "cloud",
            Self::Equivalent => "equivalent",
            Self::Manual => "manual",
        }
    }
}

/// Factory for creating mask strategy instances.
///
/// Holds the collection catalog and clones it into the strategies that
/// need it, so callers select strategies by configuration alone.
pub struct MaskFactory<T: CollectionCatalog + Clone> {
    catalog: T,
}

impl<T: CollectionCatalog + Clone + 'static> MaskFactory<T> {
    pub fn new(catalog: T) -> Self {
        Self { catalog }
    }

    /// Creates the strategy selected by `config`.
    pub fn create(&self, config: MaskConfig) -> Box<dyn MaskStrategy<T::Collection>> {
        match config {
            MaskConfig::Cloud => Box::new(CollectionCloudMask::new()),
            MaskConfig::Equivalent => Box::new(EquivalentMask::new(self.catalog.clone())),
            MaskConfig::Manual => Box::new(ManualMask::new()),
        }
    }
}
