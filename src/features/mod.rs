//! Collaborators around the coordinate pipeline: EXIF reading, configuration and map rendering.
pub mod config;
pub mod error;
pub mod metadata;
pub mod render;
