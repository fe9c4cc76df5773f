use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Block-model, pit and cross-section processing for mining map views
#[derive(Parser, Debug)]
#[command(name = "geomine", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a block-model CSV into coloured polygon GeoJSON
    Blocks(BlocksArgs),

    /// Rebuild pit boundaries from an STR file as LineString GeoJSON
    Pit(PitArgs),

    /// Convert an elevation STR survey into point GeoJSON
    Elevation(ElevationArgs),

    /// Cut a cross-section through blocks, pit boundaries and terrain
    Section(SectionArgs),
}

/// Source projection and output location shared by every command.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Source projection code, e.g. EPSG:32652
    #[arg(short, long, default_value = "EPSG:4326")]
    pub projection: String,

    /// Output file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

/// How block-model rows are categorised and filtered.
#[derive(Args, Debug)]
pub struct BlockModelArgs {
    /// Input block-model CSV
    #[arg(value_hint = ValueHint::FilePath)]
    pub model: PathBuf,

    /// Column to colour by (case-insensitive)
    #[arg(short, long, default_value = "rock")]
    pub attribute: String,

    /// Keep only the highest block of every column
    #[arg(long)]
    pub top_only: bool,

    /// JSON file of per-category colour overrides
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub colors: Option<PathBuf>,

    /// Extent for rows without dimension columns
    #[arg(long, default_value_t = default_block_dim())]
    pub default_dim: f64,
}

fn default_block_dim() -> f64 { crate::block::DEFAULT_BLOCK_DIM }

#[derive(Args, Debug)]
pub struct BlocksArgs {
    #[command(flatten)]
    pub model: BlockModelArgs,

    /// Thin the output to at most this many features
    #[arg(long)]
    pub max_features: Option<usize>,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(Args, Debug)]
pub struct PitArgs {
    /// Input pit-boundary STR file
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Close loops on points within this distance instead of exact repeats
    #[arg(long)]
    pub tolerance: Option<f64>,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ElevationArgs {
    /// Input elevation STR file
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(Args, Debug)]
pub struct SectionArgs {
    #[command(flatten)]
    pub model: BlockModelArgs,

    /// Section line start as "lng,lat"
    #[arg(long, value_parser = parse_lng_lat, allow_hyphen_values = true)]
    pub from: [f64; 2],

    /// Section line end as "lng,lat"
    #[arg(long, value_parser = parse_lng_lat, allow_hyphen_values = true)]
    pub to: [f64; 2],

    /// Pit-boundary STR file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub pit: Option<PathBuf>,

    /// Elevation STR file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub elevation: Option<PathBuf>,

    /// Number of terrain samples along the line
    #[arg(long, default_value_t = 100)]
    pub samples: usize,

    /// IDW search radius in degrees
    #[arg(long, default_value_t = 0.001)]
    pub radius: f64,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Parse "lng,lat".
pub fn parse_lng_lat(s: &str) -> Result<[f64; 2], String> {
    let (lng, lat) = s.split_once(',').ok_or_else(|| format!("expected \"lng,lat\", got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("invalid coordinate {v:?}: {e}"));
    Ok([parse(lng)?, parse(lat)?])
}
