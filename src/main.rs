use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use traitsim_core::SimilarityMatrix;
use traitsim_dataset::{demo_profiles, load_profiles};
use traitsim_report::{render_matrix, render_neighbors, render_pair_rankings};

/// Blended similarity analysis for trait profiles
#[derive(Parser, Debug)]
#[command(name = "traitsim")]
#[command(about = "Pairwise trait-profile similarity and rankings", long_about = None)]
struct Args {
    /// Path to a JSON profile batch (defaults to the bundled demo batch)
    #[arg(short, long)]
    profiles: Option<PathBuf>,

    /// How many top/bottom pairs to list in the ranking section
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting traitsim v{}", env!("CARGO_PKG_VERSION"));

    let profiles = match &args.profiles {
        Some(path) => {
            info!("Loading profiles from {:?}", path);
            load_profiles(path)?
        }
        None => {
            info!("Using bundled demo batch");
            demo_profiles()?
        }
    };
    info!("Loaded {} profiles", profiles.len());

    let matrix = SimilarityMatrix::build(&profiles)?;
    info!("Built {}x{} similarity matrix", matrix.len(), matrix.len());

    println!("Similarity matrix (%):\n");
    println!("{}", render_matrix(&matrix));

    if matrix.len() > 1 {
        println!("Nearest / farthest per entity:\n");
        println!("{}", render_neighbors(&matrix)?);

        println!("{}", render_pair_rankings(&matrix, args.top));
    }

    Ok(())
}
