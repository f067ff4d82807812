use geotag_map::GeotagMapper;
use std::path::PathBuf;

/// Print the map points found in a folder of photos, without contacting the map service.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("assets"), PathBuf::from);
    let mapper = GeotagMapper::builder().build();
    let map = mapper.collect(&dir)?;

    println!("{}", serde_json::to_string_pretty(&map)?);

    Ok(())
}
