use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dataset_split::split_dataset;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the csv dataset; the first row is the header
    #[arg(short, long)]
    src_file: std::path::PathBuf,
    /// Relative size of the training subset
    #[arg(long, default_value_t = 0.9)]
    train_ratio: f64,
    /// Relative size of the test subset
    #[arg(long, default_value_t = 0.1)]
    test_ratio: f64,
    /// verbose
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = split_dataset(&args.src_file, args.train_ratio, args.test_ratio)
        .with_context(|| format!("split-dataset {}", args.src_file.display()))?;

    println!("training={}", out.training_path.display());
    println!("test={}", out.test_path.display());
    Ok(())
}
