//! amaze: carve a labyrinth into a cube and export it as STL

use std::path::PathBuf;
use std::process::ExitCode;

use amaze_core::{MazeConfig, MazeCube, MazeError};
use clap::Parser;

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON config file to start from
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subdivisions along each cube edge (odd, greater than 5)
    #[arg(short, long)]
    segments: Option<u32>,

    /// Cube edge length
    #[arg(long)]
    size: Option<f32>,

    /// RNG seed; a random one is drawn and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output STL path
    #[arg(short, long, default_value = "maze.stl")]
    output: PathBuf,

    /// Also write the effective config (with the seed used) to this file
    #[arg(long)]
    write_config: Option<PathBuf>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve_config(&self) -> Result<MazeConfig, MazeError> {
        let mut config = match &self.config {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::default(),
        };
        if let Some(segments) = self.segments {
            config.segments = segments;
        }
        if let Some(size) = self.size {
            config.cube_size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

fn run(args: &Args) -> Result<(), MazeError> {
    let config = args.resolve_config()?;
    let cube = MazeCube::generate(&config)?;
    cube.save_stl(&args.output)?;

    if let Some(path) = &args.write_config {
        cube.config().clone().with_seed(cube.seed()).save(path)?;
    }

    let report = cube.report();
    tracing::info!(
        "Seed {}: {} floors, {} walls, {} seam duplicates dropped",
        cube.seed(),
        report.floors,
        report.walls,
        report.deduplicated
    );
    Ok(())
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amaze_cli=info,amaze_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::debug!("Starting with {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
