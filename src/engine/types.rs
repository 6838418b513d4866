//! Compute backend types and traits

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Metadata value attached to a remote image.
///
/// Scene reference properties (WRS path/row), processing flags, and other
/// per-image metadata are exposed by the backend as loosely typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Integer metadata (e.g. WRS path or row)
    Int(i64),
    /// Floating point metadata
    Float(f64),
    /// String metadata
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

/// Unary per-image transform produced by a mask strategy.
///
/// Built once per collection and applied per-image by the compositing
/// pipeline. Transforms are pure: they never mutate their input handle and
/// always return a (possibly identical) new handle. The `Arc` makes them
/// cheap to clone into the pipeline's per-image mapping.
pub type ImageTransform<I> = Arc<dyn Fn(I) -> I + Send + Sync>;

/// Returns the pass-through transform.
pub fn identity<I: Image>() -> ImageTransform<I> {
    Arc::new(|img| img)
}

/// Opaque handle to an image expression held by the compute backend.
///
/// Every operation builds a new unevaluated expression; nothing is
/// materialized locally. Handles are immutable-by-convention, so `Clone`
/// is cheap reference duplication for real backends.
pub trait Image: Clone + Send + Sync + 'static {
    /// Looks up a metadata property by name.
    ///
    /// Returns `None` when the image carries no such property. Absence is
    /// a valid, silent case, not an error.
    fn property(&self, name: &str) -> Option<PropertyValue>;

    /// Returns the acquisition timestamp, if the image carries one.
    fn acquired(&self) -> Option<DateTime<Utc>>;

    /// Selects a single band by name.
    fn select(&self, band: &str) -> Self;

    /// Pixelwise compare against a constant.
    ///
    /// Produces a mask image: 1 where the pixel differs from `value`,
    /// 0 where it equals it. Already-masked pixels stay masked.
    fn neq(&self, value: f64) -> Self;

    /// Suppresses pixels where `mask` is zero or masked.
    ///
    /// Pixels under a nonzero mask value pass through unchanged, so
    /// applying the same mask twice yields the same image.
    fn update_mask(&self, mask: &Self) -> Self;
}

/// Opaque handle to an image collection held by the compute backend.
///
/// Filters narrow the collection symbolically; the backend evaluates them
/// only when the enclosing expression is executed.
pub trait ImageCollection: Clone + Send + Sync + 'static {
    /// The image handle type this collection yields.
    type Image: Image;

    /// Narrows to images whose metadata property `name` equals `value`.
    fn filter_property(&self, name: &str, value: &PropertyValue) -> Self;

    /// Narrows to images acquired within `[start, end)`.
    ///
    /// The upper bound is exclusive: an image acquired exactly at `end`
    /// is not included.
    fn filter_date_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self;

    /// Conditional select over the filtered set.
    ///
    /// When the collection holds at least one image, returns `f` applied
    /// to the first one; otherwise returns `fallback`. The then-branch is
    /// a closure so the non-emptiness decision stays inside the backend's
    /// deferred evaluation.
    ///
    /// "First" follows the backend's native ordering of the filtered set
    /// and must be deterministic for identical filters.
    fn first_map_or<F>(&self, fallback: Self::Image, f: F) -> Self::Image
    where
        F: FnOnce(Self::Image) -> Self::Image;
}
