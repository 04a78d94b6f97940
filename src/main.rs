use std::{path::PathBuf, process};

use clap::Parser;
use tracing::{error, info, Level};

use plot_interpreter::{
    constants::{
        DEFAULT_OUTPUT_PATH, DEFAULT_PICTURE_DIMENSIONS, DEFAULT_POINT_RADIUS, MAX_PICTURE_DIMENSION, MAX_POINT_RADIUS,
    },
    run_script, PlotConfig,
};

/// Runs a plotting script and renders the points it draws to a PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the script to run
    script: PathBuf,

    /// Where to write the rendered image
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_PICTURE_DIMENSIONS.0 as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_PICTURE_DIMENSION))]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_PICTURE_DIMENSIONS.1 as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_PICTURE_DIMENSION))]
    height: u32,

    /// Radius of each drawn point in pixels
    #[arg(long, default_value_t = DEFAULT_POINT_RADIUS as u32, value_parser = clap::value_parser!(u32).range(0..=MAX_POINT_RADIUS))]
    radius: u32,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }

        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            width: self.width as usize,
            height: self.height as usize,
            point_radius: self.radius as usize,
            output: self.output.clone(),
            ..PlotConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    info!("Running script '{}'.", cli.script.display());

    if let Err(e) = run_script(&cli.script, cli.plot_config()) {
        error!("{e}");
        process::exit(1);
    }
}
