use std::path::PathBuf;

use chlorophyll_estimator::chlorophyll::{EstimationRun, RunConfig};
use chlorophyll_estimator::logger;
use clap::{ArgAction, CommandFactory, Parser};

use tracing::info;

#[derive(Parser)]
#[command(name = "chlorophyll_estimator")]
#[command(version, about = "Estimate algae chlorophyll content from average photo color", long_about = None)]
#[command(after_help = "Results are appended to output.txt in the current directory.")]
struct Cli {
    /// Images to analyze, processed in the order given
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.images.is_empty() {
        println!("usage: chlorophyll_estimator IMAGE [IMAGE ...]");
        println!("Provide at least one argument; each argument is the path of a picture to analyze.");
        println!();
        Cli::command().print_help()?;
        return Ok(());
    }

    logger::init(cli.verbose);

    let run = EstimationRun::new(RunConfig::default());
    info!(
        inputs = cli.images.len(),
        output = %run.config().output_path.display(),
        "Starting chlorophyll estimation"
    );

    run.process_all(&cli.images);

    Ok(())
}
