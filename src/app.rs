//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initializes logging
//! - parses CLI arguments
//! - dispatches to the fit/apply pipelines
//! - prints the one-line outcome for each run

use clap::{CommandFactory, Parser};

use crate::cli::{ApplyArgs, Cli, Command, FitArgs};
use crate::domain::{ApplyConfig, FitConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ols` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    let argv: Vec<String> = std::env::args().collect();
    if argv.len() <= 1 {
        Cli::command()
            .print_help()
            .map_err(|e| AppError::new(2, format!("failed to print help: {e}")))?;
        println!();
        return Ok(());
    }

    let cli = Cli::try_parse_from(crate::cli::rewrite_args(argv)).unwrap_or_else(|e| e.exit());

    match cli.command {
        Command::Fit(args) => handle_fit(fit_config_from_args(&args)),
        Command::Apply(args) => handle_apply(apply_config_from_args(&args)),
    }
}

/// `RUST_LOG` may come from the environment or a `.env` file; default is `warn`.
fn init_logging() {
    dotenvy::dotenv().ok();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

fn handle_fit(config: FitConfig) -> Result<(), AppError> {
    let run = pipeline::run_fit(&config)?;

    if let Some(quality) = &run.quality {
        println!("{}", crate::report::format_fit_summary(&run.model, quality));
    }
    println!(
        "Model saved to {} with {} features.",
        config.model_out.display(),
        run.model.n_features()
    );
    Ok(())
}

fn handle_apply(config: ApplyConfig) -> Result<(), AppError> {
    let run = pipeline::run_apply(&config)?;
    println!(
        "Predictions written to {} ({} lines)",
        config.predictions_out.display(),
        run.predictions.len()
    );
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        train_csv: args.train.clone(),
        model_out: args.out.clone(),
        summary: args.summary,
    }
}

pub fn apply_config_from_args(args: &ApplyArgs) -> ApplyConfig {
    ApplyConfig {
        model: args.model.clone(),
        input_csv: args.input.clone(),
        predictions_out: args.out.clone(),
    }
}
