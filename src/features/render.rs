use crate::coords::structs::{BoundingBox, NormalizedPoint};
use crate::features::config::MapboxConfig;
use crate::features::error::RenderError;
use crate::structs::MapPoints;
use bon::bon;
use reqwest::{Client, Url};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File written next to the photos.
pub const OUTPUT_FILE_NAME: &str = "_map.png";
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Renders [`MapPoints`] to a PNG through the Mapbox Static Images API.
pub struct MapRenderer {
    client: Client,
    config: MapboxConfig,
    width: u32,
    height: u32,
    retina: bool,
    base_url: String,
}

#[bon]
impl MapRenderer {
    /// Constructs a `MapRenderer` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `config: MapboxConfig` - Access token and style to render with.
    /// * `width: u32` - (Default: `1200`) Image width in logical pixels.
    /// * `height: u32` - (Default: `1200`) Image height in logical pixels.
    /// * `retina: bool` - (Default: `true`) Request a `@2x` image.
    /// * `base_url: String` - (Default: `https://api.mapbox.com`) API host, overridable for tests.
    #[builder]
    pub fn new(
        config: MapboxConfig,
        #[builder(default = 1200)] width: u32,
        #[builder(default = 1200)] height: u32,
        #[builder(default = true)] retina: bool,
        #[builder(into, default = DEFAULT_BASE_URL.to_string())] base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            config,
            width,
            height,
            retina,
            base_url,
        }
    }

    /// Builds the static image URL: a MultiPoint overlay framed by the bounding box.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidUrl`] if `base_url` cannot carry a path.
    pub fn request_url(&self, map: &MapPoints) -> Result<Url, RenderError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| RenderError::InvalidUrl(e.to_string()))?;
        let overlay = format!("geojson({})", overlay_geojson(&map.points));
        let viewport = viewport(&map.bounding_box);
        let size = format!(
            "{}x{}{}",
            self.width,
            self.height,
            if self.retina { "@2x" } else { "" }
        );

        url.path_segments_mut()
            .map_err(|()| RenderError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "styles",
                "v1",
                self.config.style_user.as_str(),
                self.config.style_id.as_str(),
                "static",
                overlay.as_str(),
                viewport.as_str(),
                size.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("access_token", &self.config.access_token);
        Ok(url)
    }

    /// Fetches the rendered map image.
    ///
    /// # Errors
    ///
    /// * [`RenderError::Http`]: the request could not be sent or the body not read.
    /// * [`RenderError::Status`]: the service answered with a non-success status; the
    ///   response body is kept so the caller can show the service's reason.
    pub async fn render(&self, map: &MapPoints) -> Result<Vec<u8>, RenderError> {
        let url = self.request_url(map)?;
        debug!(
            points = map.points.len(),
            viewport = %viewport(&map.bounding_box),
            "Requesting static map"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RenderError::Status { status, body });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Renders the map and writes it to [`OUTPUT_FILE_NAME`] inside `dir`.
    pub async fn render_to_dir(
        &self,
        map: &MapPoints,
        dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let image = self.render(map).await?;
        let output = dir.join(OUTPUT_FILE_NAME);
        tokio::fs::write(&output, &image).await?;
        info!(path = %output.display(), bytes = image.len(), "Map image written");
        Ok(output)
    }
}

/// A GeoJSON `Feature` with a `MultiPoint` geometry. Repeated points are listed once.
pub fn overlay_geojson(points: &[NormalizedPoint]) -> Value {
    let mut seen = HashSet::new();
    let coordinates: Vec<[f64; 2]> = points
        .iter()
        .filter(|p| seen.insert((p.x.to_bits(), p.y.to_bits())))
        .map(|&p| p.into())
        .collect();

    json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "MultiPoint",
            "coordinates": coordinates,
        },
    })
}

/// `[min_x,min_y,max_x,max_y]`, or `auto` when the box has no area to frame.
pub fn viewport(bbox: &BoundingBox) -> String {
    if bbox.is_degenerate() {
        return "auto".to_string();
    }
    let [min_x, min_y, max_x, max_y] = bbox.to_array();
    format!("[{min_x},{min_y},{max_x},{max_y}]")
}
