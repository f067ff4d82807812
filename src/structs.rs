use crate::coords::structs::{BoundingBox, NormalizedPoint};
use serde::{Deserialize, Serialize};

/// Everything the map renderer needs: the located points and the box around them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoints {
    /// Rounded `(longitude, latitude)` points, in file order, duplicates included.
    pub points: Vec<NormalizedPoint>,
    pub bounding_box: BoundingBox,
    /// Number of images considered, including those without a usable position.
    pub images_scanned: usize,
}
