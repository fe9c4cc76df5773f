use anyhow::Result;
use clap::Parser;

use geomine::cli::{Cli, Commands};
use geomine::commands::{blocks, elevation, pit, section};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose { 0 => "warn", 1 => "info", _ => "debug" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Commands::Blocks(args) => blocks::run(&cli, args),
        Commands::Pit(args) => pit::run(&cli, args),
        Commands::Elevation(args) => elevation::run(&cli, args),
        Commands::Section(args) => section::run(&cli, args),
    }
}
