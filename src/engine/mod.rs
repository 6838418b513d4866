//! Compute backend abstraction
//!
//! This module defines the seam to the external geospatial compute service
//! that executes all image algebra. The [`Image`] and [`ImageCollection`]
//! traits describe symbolic, deferred expression handles: every operation
//! builds a new unevaluated expression, and nothing is materialized until
//! the backend executes the enclosing expression, typically per-image and
//! possibly in parallel, entirely on its side.
//!
//! Mask strategies produce [`ImageTransform`] values over these handles,
//! which keeps the strategies free of local state and lets tests drive them
//! against a small in-memory fake backend.

mod types;

pub use types::{identity, Image, ImageCollection, ImageTransform, PropertyValue};

#[cfg(test)]
pub(crate) mod fake;
