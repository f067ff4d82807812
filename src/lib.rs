//! # Geotag Map
//!
//! Extract GPS positions from geotagged photos and reduce them to a map-ready bounding box.
//!
//! ## Key Features
//!
//! - **GPS Decoding**: Converts EXIF sexagesimal rationals (degrees, minutes, seconds) and
//!   hemisphere references into signed decimal degrees, with typed errors for broken tags.
//! - **Normalization**: Flips coordinates to `(longitude, latitude)` map order and rounds them
//!   to a fixed precision.
//! - **Bounding Box**: Reduces the points to the smallest enclosing rectangle, reporting an
//!   empty input instead of returning a degenerate box.
//! - **Static Maps**: Renders the points through the Mapbox Static Images API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use geotag_map::{GeotagMapper, MapRenderer, MapboxConfig};
//!
//! #[tokio::main]
//! async fn main() -> color_eyre::Result<()> {
//!     let dir = Path::new("assets/holiday");
//!
//!     // Decode, normalize and reduce every JPEG in the folder.
//!     let mapper = GeotagMapper::builder().build();
//!     let map = mapper.collect(dir)?;
//!     println!("Bounding box: {:?}", map.bounding_box);
//!
//!     // Render the points and write `_map.png` next to the photos.
//!     let renderer = MapRenderer::builder().config(MapboxConfig::from_env()?).build();
//!     renderer.render_to_dir(&map, dir).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod coords;
mod error;
pub mod features;
mod geotag_mapper;
pub mod structs;
pub mod utils;

pub use coords::error::{BoundingBoxError, DecodeError};
pub use coords::structs::{BoundingBox, DecimalCoordinate, NormalizedPoint, RawGpsMetadata};
pub use error::GeotagMapError;
pub use features::config::MapboxConfig;
pub use features::render::{MapRenderer, OUTPUT_FILE_NAME};
pub use geotag_mapper::GeotagMapper;
pub use structs::MapPoints;
