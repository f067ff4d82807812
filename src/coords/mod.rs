//! Coordinate pipeline: decode EXIF GPS tags, normalize them to map points, reduce to a box.
mod bounding_box;
mod decode;
pub mod error;
mod normalize;
pub mod structs;

pub use bounding_box::bounding_box;
pub use decode::{decode, try_decode};
pub use normalize::{DEFAULT_PRECISION, MAX_PRECISION, normalize, normalize_points, round_to};
