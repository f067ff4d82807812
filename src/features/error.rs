use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Could not open image file")]
    Io(#[from] std::io::Error),

    #[error("Could not parse EXIF block: {0}")]
    Exif(#[from] exif::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Request to the map service failed")]
    Http(#[from] reqwest::Error),

    #[error("Map service responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Could not build map request URL: {0}")]
    InvalidUrl(String),

    #[error("Could not write map image")]
    Io(#[from] std::io::Error),
}
