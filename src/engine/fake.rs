//! In-memory fakes for the compute backend traits.
//!
//! Evaluates eagerly over tiny pixel vectors so strategy tests can assert
//! exactly which pixels a produced transform suppresses. Masked pixels are
//! `None`.

use super::types::{Image, ImageCollection, PropertyValue};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Fake image backed by named bands of `Option<f64>` pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FakeImage {
    properties: HashMap<String, PropertyValue>,
    acquired: Option<DateTime<Utc>>,
    bands: BTreeMap<String, Vec<Option<f64>>>,
}

impl FakeImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a metadata property.
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    /// Sets the acquisition timestamp.
    pub fn with_acquired(mut self, acquired: DateTime<Utc>) -> Self {
        self.acquired = Some(acquired);
        self
    }

    /// Adds a band with all pixels unmasked.
    pub fn with_band(mut self, name: &str, pixels: Vec<f64>) -> Self {
        self.bands
            .insert(name.to_string(), pixels.into_iter().map(Some).collect());
        self
    }

    /// Returns a band's pixels for assertions.
    pub fn band(&self, name: &str) -> Option<&[Option<f64>]> {
        self.bands.get(name).map(|pixels| pixels.as_slice())
    }
}

impl Image for FakeImage {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).cloned()
    }

    fn acquired(&self) -> Option<DateTime<Utc>> {
        self.acquired
    }

    fn select(&self, band: &str) -> Self {
        let pixels = self.bands.get(band).cloned().unwrap_or_default();
        Self {
            properties: self.properties.clone(),
            acquired: self.acquired,
            bands: BTreeMap::from([(band.to_string(), pixels)]),
        }
    }

    fn neq(&self, value: f64) -> Self {
        let bands = self
            .bands
            .iter()
            .map(|(name, pixels)| {
                let compared = pixels
                    .iter()
                    .map(|p| p.map(|v| if v != value { 1.0 } else { 0.0 }))
                    .collect();
                (name.clone(), compared)
            })
            .collect();
        Self {
            bands,
            ..self.clone()
        }
    }

    fn update_mask(&self, mask: &Self) -> Self {
        // The mask contributes its first band; pixels are suppressed where
        // the mask value is zero or itself masked.
        let mask_pixels: &[Option<f64>] = mask
            .bands
            .values()
            .next()
            .map(|pixels| pixels.as_slice())
            .unwrap_or(&[]);
        let bands = self
            .bands
            .iter()
            .map(|(name, pixels)| {
                let masked = pixels
                    .iter()
                    .enumerate()
                    .map(|(i, p)| match mask_pixels.get(i).copied().flatten() {
                        Some(v) if v != 0.0 => *p,
                        _ => None,
                    })
                    .collect();
                (name.clone(), masked)
            })
            .collect();
        Self {
            bands,
            ..self.clone()
        }
    }
}

/// Fake collection over an ordered list of images.
///
/// Filters evaluate eagerly; `first_map_or` keeps insertion order, which
/// stands in for the backend's native ordering.
#[derive(Debug, Clone, Default)]
pub struct FakeCollection {
    images: Vec<FakeImage>,
}

impl FakeCollection {
    pub fn new(images: Vec<FakeImage>) -> Self {
        Self { images }
    }
}

impl ImageCollection for FakeCollection {
    type Image = FakeImage;

    fn filter_property(&self, name: &str, value: &PropertyValue) -> Self {
        let images = self
            .images
            .iter()
            .filter(|img| img.property(name).as_ref() == Some(value))
            .cloned()
            .collect();
        Self { images }
    }

    fn filter_date_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let images = self
            .images
            .iter()
            .filter(|img| img.acquired().is_some_and(|t| t >= start && t < end))
            .cloned()
            .collect();
        Self { images }
    }

    fn first_map_or<F>(&self, fallback: Self::Image, f: F) -> Self::Image
    where
        F: FnOnce(Self::Image) -> Self::Image,
    {
        match self.images.first() {
            Some(first) => f(first.clone()),
            None => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_neq_builds_zero_one_mask() {
        let img = FakeImage::new().with_band("fmask", vec![0.0, 2.0, 4.0]);
        let mask = img.neq(2.0);
        assert_eq!(
            mask.band("fmask").unwrap(),
            &[Some(1.0), Some(0.0), Some(1.0)]
        );
    }

    #[test]
    fn test_update_mask_suppresses_zero_and_masked_pixels() {
        let img = FakeImage::new().with_band("B1", vec![10.0, 20.0, 30.0]);
        let mask = FakeImage::new().with_band("m", vec![1.0, 0.0, 1.0]);
        let masked = img.update_mask(&mask);
        assert_eq!(
            masked.band("B1").unwrap(),
            &[Some(10.0), None, Some(30.0)]
        );

        // Masking again with the same mask changes nothing.
        let again = masked.update_mask(&mask);
        assert_eq!(again, masked);
    }

    #[test]
    fn test_filter_date_range_upper_bound_is_exclusive() {
        let col = FakeCollection::new(vec![
            FakeImage::new().with_acquired(ts(5, 0)),
            FakeImage::new().with_acquired(ts(6, 0)),
        ]);
        let filtered = col.filter_date_range(ts(5, 0), ts(6, 0));
        let kept = filtered.first_map_or(FakeImage::new(), |img| img);
        assert_eq!(kept.acquired(), Some(ts(5, 0)));

        let none = col.filter_date_range(ts(6, 1), ts(7, 1));
        let fallback = FakeImage::new().with_property("marker", 1);
        assert_eq!(none.first_map_or(fallback.clone(), |img| img), fallback);
    }

    #[test]
    fn test_filter_property_matches_exact_value() {
        let col = FakeCollection::new(vec![
            FakeImage::new().with_property("WRS_PATH", 231),
            FakeImage::new().with_property("WRS_PATH", 232),
        ]);
        let filtered = col.filter_property("WRS_PATH", &PropertyValue::Int(232));
        let kept = filtered.first_map_or(FakeImage::new(), |img| img);
        assert_eq!(kept.property("WRS_PATH"), Some(PropertyValue::Int(232)));
    }
}
