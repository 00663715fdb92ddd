//! Train a random tree on a CSV file and report
//! in-sample and out-of-sample RMSE and correlation.
//!
//! Usage: cargo run --bin testlearner -- --file data/ripple.csv --leaf-size 50

use clap::Parser;
use colored::Colorize;

use rtlearner::prelude::*;

use std::path::PathBuf;
use std::process::ExitCode;


#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate a random tree learner on a CSV file")]
struct Args {
    /// CSV file to read
    #[arg(short, long)]
    file: PathBuf,

    /// The file has no header row
    #[arg(long)]
    no_header: bool,

    /// Drop the first column (e.g., a date column)
    #[arg(long)]
    drop_first_column: bool,

    /// Target column name (default: the last column)
    #[arg(short, long)]
    target: Option<String>,

    /// Leaf size
    #[arg(short, long, default_value = "50")]
    leaf_size: usize,

    /// Ratio of the rows used for training
    #[arg(long, default_value = "0.6")]
    train_ratio: f64,

    /// Random seed
    #[arg(short, long, default_value = "1234")]
    seed: u64,

    /// Random feature picks per node (default: the number of features)
    #[arg(long)]
    max_feature_trials: Option<usize>,

    /// Print a summary of the grown tree
    #[arg(short, long)]
    verbose: bool,

    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,

    /// Write the grown tree to a Graphviz dot file
    #[arg(long)]
    dot: Option<PathBuf>,
}


fn run(args: Args) -> Result<()> {
    let mut reader = SampleReader::new()
        .file(&args.file)
        .has_header(!args.no_header)
        .drop_first_column(args.drop_first_column);
    if let Some(target) = &args.target {
        reader = reader.target_feature(target);
    }
    let sample = reader.read()?;

    let mut builder = RandomTreeBuilder::new()
        .leaf_size(args.leaf_size)
        .seed(args.seed)
        .verbose(args.verbose);
    if let Some(trials) = args.max_feature_trials {
        builder = builder.max_feature_trials(trials);
    }
    let learner = builder.build();

    let (evaluation, tree) = Evaluation::holdout(
        &sample, &learner, args.train_ratio,
    )?;

    if args.json {
        println!("{}", evaluation.to_json()?);
    } else {
        println!("{evaluation}");
    }

    if let Some(path) = &args.dot {
        tree.to_dot_file(path)?;
    }
    Ok(())
}


fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "[ERROR]".bold().bright_red());
            ExitCode::FAILURE
        },
    }
}
