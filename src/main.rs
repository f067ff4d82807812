use clap::Parser;
use color_eyre::eyre::WrapErr;
use geotag_map::coords::{DEFAULT_PRECISION, MAX_PRECISION};
use geotag_map::{GeotagMapError, GeotagMapper, MapRenderer, MapboxConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate an image file containing a map of the coordinates stored in the given pictures.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing geotagged pictures
    #[arg(value_name = "PATH")]
    directory: PathBuf,

    /// Decimal places coordinates are rounded to
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PRECISION,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION))
    )]
    precision: u32,

    /// Map width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Map height in pixels
    #[arg(long, default_value_t = 1200)]
    height: u32,

    /// Request a standard instead of a @2x image
    #[arg(long)]
    no_retina: bool,

    /// Also read hidden (dot) files
    #[arg(long)]
    include_hidden: bool,

    /// Print the points and bounding box as JSON instead of rendering a map
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let directory = args.directory.clone();
    run(args)
        .await
        .wrap_err_with(|| format!("No map for {}", directory.display()))
}

async fn run(args: Args) -> Result<(), GeotagMapError> {
    let mapper = GeotagMapper::builder()
        .precision(args.precision)
        .include_hidden(args.include_hidden)
        .build();
    let map = mapper.collect(&args.directory)?;

    println!("bounding box: {:?}", map.bounding_box.to_array());

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let renderer = MapRenderer::builder()
        .config(MapboxConfig::from_env()?)
        .width(args.width)
        .height(args.height)
        .retina(!args.no_retina)
        .build();
    let output = renderer.render_to_dir(&map, &args.directory).await?;
    println!("map written to {}", output.display());

    Ok(())
}
