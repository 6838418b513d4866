//! Equivalent-collection mask strategy.
//!
//! Surface-reflectance collections often lack a usable cloud mask while
//! their top-of-atmosphere counterpart carries a classification band over
//! the very same scenes. This strategy borrows that band: per image it
//! looks up the same-scene acquisition in the equivalent collection and
//! suppresses the pixels flagged as cloud shadow.

use super::types::{MaskError, MaskStrategy};
use crate::catalog::{CollectionCatalog, CollectionDescriptor};
use crate::engine::{identity, Image, ImageCollection, ImageTransform};
use chrono::Duration;
use std::sync::Arc;
use tracing::{debug, warn};

/// Image property holding the WRS path of the scene.
pub const PATH_PROPERTY: &str = "WRS_PATH";

/// Image property holding the WRS row of the scene.
pub const ROW_PROPERTY: &str = "WRS_ROW";

/// Classification code marking cloud shadow in the borrowed mask band.
pub const CLOUD_SHADOW_CODE: f64 = 2.0;

/// Borrows the cloud classification band from an equivalent collection.
///
/// When the governing collection names an equivalent, the produced
/// transform matches each image against it by WRS path/row and an
/// acquisition window of `[t, t + 1 day)` — same-day scenes match
/// regardless of time-of-day, a scene acquired exactly 24h later does
/// not. The first match (in the backend's collection order) contributes
/// its mask band; pixels where that band equals [`CLOUD_SHADOW_CODE`] are
/// suppressed. Images with no match, and collections with no equivalent
/// configured, pass through unchanged.
pub struct EquivalentMask<T: CollectionCatalog> {
    catalog: T,
}

impl<T: CollectionCatalog> EquivalentMask<T> {
    /// Create the strategy around the catalog used to resolve equivalent
    /// collections.
    pub fn new(catalog: T) -> Self {
        Self { catalog }
    }
}

impl<T: CollectionCatalog> MaskStrategy<T::Collection> for EquivalentMask<T> {
    fn name(&self) -> &str {
        "equivalent"
    }

    fn build(
        &self,
        collection: &CollectionDescriptor<T::Collection>,
    ) -> Result<ImageTransform<<T::Collection as ImageCollection>::Image>, MaskError> {
        let Some(equiv_id) = &collection.equivalent else {
            debug!(
                collection = %collection.id,
                "no equivalent collection configured, images pass through"
            );
            return Ok(identity());
        };

        // Resolved once here; the transform captures only the handle and
        // the band name.
        let equiv = self.catalog.resolve(equiv_id)?;
        if equiv.mask_band.is_empty() {
            return Err(MaskError::MissingMetadata {
                id: equiv.id,
                field: "mask_band",
            });
        }
        debug!(
            collection = %collection.id,
            equivalent = %equiv.id,
            band = %equiv.mask_band,
            "borrowing mask band from equivalent collection"
        );

        let scenes = equiv.collection;
        let band = equiv.mask_band;
        let transform: ImageTransform<<T::Collection as ImageCollection>::Image> =
            Arc::new(move |img| {
                let Some(path) = img.property(PATH_PROPERTY) else {
                    warn!(property = PATH_PROPERTY, "image lacks scene property, left unmasked");
                    return img;
                };
                let Some(row) = img.property(ROW_PROPERTY) else {
                    warn!(property = ROW_PROPERTY, "image lacks scene property, left unmasked");
                    return img;
                };
                let Some(acquired) = img.acquired() else {
                    warn!("image lacks an acquisition timestamp, left unmasked");
                    return img;
                };

                let matches = scenes
                    .filter_property(PATH_PROPERTY, &path)
                    .filter_property(ROW_PROPERTY, &row)
                    .filter_date_range(acquired, acquired + Duration::days(1));
                matches.first_map_or(img.clone(), |scene| {
                    img.update_mask(&scene.select(&band).neq(CLOUD_SHADOW_CODE))
                })
            });
        Ok(transform)
    }
}
