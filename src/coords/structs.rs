use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";

/// An EXIF rational: `numerator / denominator`, stored without loss.
///
/// Serialized as a `[numerator, denominator]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Rational {
    pub num: u32,
    pub denom: u32,
}

impl Rational {
    pub const fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    /// Returns `None` for a zero denominator instead of producing inf or NaN.
    pub fn to_f64(self) -> Option<f64> {
        (self.denom != 0).then(|| f64::from(self.num) / f64::from(self.denom))
    }
}

impl From<(u32, u32)> for Rational {
    fn from((num, denom): (u32, u32)) -> Self {
        Self { num, denom }
    }
}

impl From<Rational> for (u32, u32) {
    fn from(r: Rational) -> Self {
        (r.num, r.denom)
    }
}

/// A single GPS tag value as read from the metadata block.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Rationals(Vec<Rational>),
    Text(String),
    Other(serde_json::Value),
}

impl TagValue {
    /// Empty strings and empty rational lists count as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            TagValue::Rationals(values) => values.is_empty(),
            TagValue::Text(text) => text.is_empty(),
            TagValue::Other(value) => value.is_null(),
        }
    }
}

/// The GPS section of one image, keyed by EXIF tag name (`GPSLatitude`, `GPSLatitudeRef`, ...).
///
/// An empty map means the image carried no GPS section at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawGpsMetadata {
    tags: BTreeMap<String, TagValue>,
}

impl RawGpsMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>, value: TagValue) {
        self.tags.insert(tag.into(), value);
    }

    /// Looks up a tag, treating falsy values as missing.
    pub fn get(&self, tag: &str) -> Option<&TagValue> {
        self.tags.get(tag).filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

/// Signed decimal degrees, as decoded from a single image.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DecimalCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl DecimalCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A rounded point in map axis order: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<NormalizedPoint> for [f64; 2] {
    fn from(p: NormalizedPoint) -> Self {
        [p.x, p.y]
    }
}

/// Minimal axis-aligned rectangle around a set of [`NormalizedPoint`]s.
///
/// Only constructed from a non-empty point set, so `min.x <= max.x` and `min.y <= max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoundingBox {
    pub min: NormalizedPoint,
    pub max: NormalizedPoint,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> NormalizedPoint {
        NormalizedPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains(&self, point: &NormalizedPoint) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// True when the box has zero extent on either axis (e.g. a single photo location).
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// `[min_x, min_y, max_x, max_y]`, the order used by GeoJSON `bbox` and map viewports.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }
}
