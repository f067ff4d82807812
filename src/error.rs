use thiserror::Error;

/// The primary error type for the geotag_map crate.
#[derive(Error, Debug)]
pub enum GeotagMapError {
    #[error("Could not list images in directory")]
    Walk(#[from] walkdir::Error),

    // --- Pipeline Errors ---
    #[error("Bounding box computation failed: {0}")]
    BoundingBox(#[from] crate::coords::error::BoundingBoxError),

    #[error("Could not serialize map points: {0}")]
    Json(#[from] serde_json::Error),

    // --- Map Service Errors ---
    #[error("Map service configuration is incomplete: {0}")]
    Config(#[from] crate::features::error::ConfigError),

    #[error("Map rendering failed: {0}")]
    Render(#[from] crate::features::error::RenderError),
}
