use crate::GeotagMapError;
use crate::coords::structs::{DecimalCoordinate, RawGpsMetadata};
use crate::coords::{DEFAULT_PRECISION, bounding_box, decode, normalize};
use crate::features::metadata::read_gps_metadata;
use crate::structs::MapPoints;
use crate::utils::list_image_files;
use bon::bon;
use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// The entry point for turning a folder of geotagged photos into map points.
///
/// Use the builder pattern to construct an instance:
/// ```rust
/// # use geotag_map::GeotagMapper;
/// let mapper = GeotagMapper::builder()
///     .precision(3) // Optionally configure parameters
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GeotagMapper {
    precision: u32,
    include_hidden: bool,
}

#[bon]
impl GeotagMapper {
    /// Constructs a `GeotagMapper` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `precision: u32` - (Default: `2`) Decimal places the coordinates are rounded to.
    /// * `include_hidden: bool` - (Default: `false`) Also read dot-files in the directory.
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_PRECISION)] precision: u32,
        #[builder(default = false)] include_hidden: bool,
    ) -> Self {
        Self {
            precision,
            include_hidden,
        }
    }

    /// Reads every JPEG in `dir` and reduces their GPS positions to map points.
    ///
    /// Images are decoded in parallel; results are kept in path order. Images that cannot be
    /// read, or carry no usable position, are logged and skipped.
    ///
    /// # Errors
    ///
    /// * [`GeotagMapError::Walk`]: the directory cannot be listed.
    /// * [`GeotagMapError::BoundingBox`]: none of the images has a usable position.
    pub fn collect(&self, dir: &Path) -> Result<MapPoints, GeotagMapError> {
        let files = list_image_files(dir, self.include_hidden)?;
        info!(dir = %dir.display(), images = files.len(), "Scanning images");

        let coordinates: Vec<Option<DecimalCoordinate>> = files
            .par_iter()
            .map(|path| {
                let metadata = read_gps_metadata(path).unwrap_or_else(|e| {
                    warn!(path = %path.display(), "Could not read metadata: {e}");
                    RawGpsMetadata::new()
                });
                decode(&metadata)
            })
            .collect();

        self.reduce(&coordinates)
    }

    /// Runs the pure pipeline over metadata that was already read.
    pub fn collect_from_metadata(
        &self,
        metadata: &[RawGpsMetadata],
    ) -> Result<MapPoints, GeotagMapError> {
        let coordinates: Vec<_> = metadata.iter().map(decode).collect();
        self.reduce(&coordinates)
    }

    fn reduce(
        &self,
        coordinates: &[Option<DecimalCoordinate>],
    ) -> Result<MapPoints, GeotagMapError> {
        let points = normalize(coordinates, self.precision);
        let bounding_box = bounding_box(&points)?;
        info!(
            located = points.len(),
            scanned = coordinates.len(),
            "Computed bounding box {:?}",
            bounding_box.to_array()
        );
        Ok(MapPoints {
            points,
            bounding_box,
            images_scanned: coordinates.len(),
        })
    }
}
