use geotag_map::{GeotagMapper, MapRenderer, MapboxConfig};
use std::path::Path;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let dir = Path::new("assets");
    let map = GeotagMapper::builder().build().collect(dir)?;
    let renderer = MapRenderer::builder()
        .config(MapboxConfig::from_env()?)
        .build();
    let output = renderer.render_to_dir(&map, dir).await?;
    println!("\t{}", output.display());

    Ok(())
}
