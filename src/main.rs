mod eval;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::input::load_results_dir;
use crate::model::areas::{
    abbreviation_lower, abbreviation_upper, area_in_group, area_members, remove_lateralization,
};
use crate::model::config::ProcessConfig;
use crate::model::metric::{MetricName, parse_metrics};
use crate::pipeline::process_results;
use crate::pipeline::stage5_report::{Stage5Input, write_reports};
use crate::report::RunInfo;

#[derive(Debug, Parser)]
#[command(name = "neurofold", version, about = "Score and fold-average regression results")]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a results directory and write fold-averaged reports.
    Run(RunArgs),
    /// List accepted metric names and aliases.
    Metrics,
    /// Normalize a brain-area name.
    Area { name: String },
}

#[derive(Debug, Clone, clap::Args)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// JSON run config; defaults to the first *config.json in --input.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long = "metric")]
    metrics: Vec<String>,
    #[arg(long)]
    by_sample: bool,
    /// Keep per-feature (or per-sample) scores instead of their per-row mean.
    #[arg(long)]
    keep_variables: bool,
    #[arg(long)]
    shuffle: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    iter_column: Option<String>,
    #[arg(long = "keep")]
    keep: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_pipeline(&args),
        Command::Metrics => {
            for metric in MetricName::ALL {
                println!("{}\t{}", metric.canonical(), metric.aliases().join(", "));
            }
            Ok(())
        }
        Command::Area { name } => {
            println!("{}", describe_area(&name)?);
            Ok(())
        }
    }
}

fn run_pipeline(args: &RunArgs) -> Result<(), String> {
    let bundle =
        load_results_dir(&args.input, args.config.as_deref()).map_err(|e| e.to_string())?;
    let config = build_config(bundle.config.clone().unwrap_or_default(), args)?;
    tracing::info!(
        "metrics {:?}, by {}, iteration column {}",
        config.metrics,
        if config.by_feature { "feature" } else { "sample" },
        config.iteration_column
    );

    let mut table = bundle.table;
    let n_rows_in = table.n_rows();
    let output = process_results(&mut table, &config).map_err(|e| e.to_string())?;

    let input = Stage5Input {
        run: RunInfo {
            tool_name: "neurofold".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            input: bundle.results_path.display().to_string(),
            n_rows_in,
            iteration_column: config.iteration_column.clone(),
            by_feature: config.by_feature,
            average_across_variables: config.average_across_variables,
            shuffle_ground_truth: config.shuffle_ground_truth,
            shuffle_seed: config.shuffle_seed,
        },
        averaged: &output.averaged,
        metrics: &output.active_metrics,
        columns_to_keep: &config.columns_to_keep,
    };
    write_reports(&input, &args.out).map_err(|e| e.to_string())?;
    Ok(())
}

/// CLI flags override the loaded config.
fn build_config(mut config: ProcessConfig, args: &RunArgs) -> Result<ProcessConfig, String> {
    if !args.metrics.is_empty() {
        config.metrics = parse_metrics(&args.metrics).map_err(|e| e.to_string())?;
    }
    if args.by_sample {
        config.by_feature = false;
    }
    if args.keep_variables {
        config.average_across_variables = false;
    }
    if args.shuffle {
        config.shuffle_ground_truth = true;
    }
    if let Some(seed) = args.seed {
        config.shuffle_seed = seed;
    }
    if let Some(column) = &args.iter_column {
        config.iteration_column = column.clone();
    }
    if !args.keep.is_empty() {
        config.columns_to_keep = args.keep.clone();
    }
    if config.metrics.is_empty() {
        return Err("no metrics requested".to_string());
    }
    Ok(config)
}

fn describe_area(name: &str) -> Result<String, String> {
    let bare = remove_lateralization(name).unwrap_or_else(|_| name.to_string());
    let upper = abbreviation_upper(&bare).map_err(|e| e.to_string())?;
    let lower = abbreviation_lower(&bare).map_err(|e| e.to_string())?;
    let members = area_members(lower)
        .map(|m| m.join(", "))
        .unwrap_or_else(|_| "-".to_string());
    let mtl = area_in_group(&bare, "mtl").unwrap_or(false);
    Ok(format!("{bare}\t{upper}\t{lower}\tmtl={mtl}\t{members}"))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
