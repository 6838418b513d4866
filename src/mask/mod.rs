//! Cloud and cloud-shadow mask strategies
//!
//! This module provides the [`MaskStrategy`] trait and its implementations
//! for suppressing cloud and cloud-shadow pixels when building
//! best-available-pixel composites from a satellite image time series.
//!
//! A strategy turns a collection's metadata into a per-image
//! [`ImageTransform`](crate::engine::ImageTransform) that the compositing
//! pipeline maps across the collection:
//!
//! - [`CollectionCloudMask`] — delegates to the mask the collection itself
//!   ships with, identity when there is none.
//! - [`EquivalentMask`] — borrows the cloud classification band from the
//!   same-scene image of an equivalent collection, identity when none is
//!   configured.
//! - [`ManualMask`] — declared placeholder that fails fast.
//!
//! # Example
//!
//! ```ignore
//! use bapmask::mask::{MaskConfig, MaskFactory};
//!
//! let factory = MaskFactory::new(catalog);
//! let strategy = factory.create(MaskConfig::Equivalent);
//! let transform = strategy.build(&collection)?;
//! // The pipeline applies `transform` to every image in the series.
//! ```

mod cloud;
mod equivalent;
mod factory;
mod manual;
mod types;

pub use cloud::CollectionCloudMask;
pub use equivalent::{EquivalentMask, CLOUD_SHADOW_CODE, PATH_PROPERTY, ROW_PROPERTY};
pub use factory::{MaskConfig, MaskFactory};
pub use manual::ManualMask;
pub use types::{MaskError, MaskStrategy};
