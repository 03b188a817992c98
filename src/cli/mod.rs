//! Command-line parsing for the OLS fit/apply tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting and scoring code, which only ever sees `FitConfig` / `ApplyConfig`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ols",
    version,
    about = "Ordinary least squares: fit a linear model from CSV and apply it to new rows",
    after_help = "Notes:\n  * CSV must be numeric and headerless. Whitespace is allowed around commas.\n  * Parse failures report the line and column of the offending value.\n  * The legacy forms `--fit <csv> --out <json>` and `--apply <json> --in <csv> --out <txt>` are accepted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a model from a training CSV whose rows are `y,x1,...,xp`.
    Fit(FitArgs),
    /// Apply a saved model to a CSV whose rows are `x1,...,xp`.
    Apply(ApplyArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Training CSV (headerless, numeric; column 0 is the target).
    #[arg(value_name = "TRAIN_CSV")]
    pub train: PathBuf,

    /// Where to write the fitted model.
    #[arg(short = 'o', long, value_name = "MODEL_JSON")]
    pub out: PathBuf,

    /// Print coefficients and in-sample diagnostics after fitting.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct ApplyArgs {
    /// Model file produced by `ols fit`.
    #[arg(value_name = "MODEL_JSON")]
    pub model: PathBuf,

    /// Feature CSV (headerless, numeric; one row per prediction).
    #[arg(short = 'i', long = "in", value_name = "X_CSV")]
    pub input: PathBuf,

    /// Where to write predictions (one per line).
    #[arg(short = 'o', long, value_name = "PRED_TXT")]
    pub out: PathBuf,
}

/// Rewrite the legacy flag form into subcommand form.
///
/// Rules:
/// - `ols --fit A --out M`              -> `ols fit A --out M`
/// - `ols --apply M --in X --out P`     -> `ols apply M --in X --out P`
/// - `--model M` supplies the model path for apply; it never replaces the
///   training CSV of a fit
/// - anything already using a subcommand (or help/version) is unchanged
pub fn rewrite_args(argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1) else {
        return argv;
    };
    if matches!(
        arg1.as_str(),
        "fit" | "apply" | "help" | "-h" | "--help" | "-V" | "--version"
    ) {
        return argv;
    }

    let mut mode: Option<&'static str> = None;
    let mut train: Option<String> = None;
    let mut model: Option<String> = None;
    let mut rest = Vec::new();

    let mut it = argv.iter().skip(1);
    while let Some(arg) = it.next() {
        let flag = arg.as_str();
        if !matches!(flag, "--fit" | "--apply" | "--model") {
            rest.push(arg.clone());
            continue;
        }
        let Some(value) = it.next() else {
            rest.push(arg.clone());
            continue;
        };
        match flag {
            "--fit" => {
                mode = Some("fit");
                train = Some(value.clone());
            }
            "--apply" => {
                mode = Some("apply");
                model = Some(value.clone());
            }
            _ => model = Some(value.clone()),
        }
    }

    let (mode, target) = match mode {
        Some("fit") => ("fit", train),
        Some(apply) => (apply, model),
        None => return argv,
    };

    let mut out = Vec::with_capacity(argv.len());
    out.push(argv[0].clone());
    out.push(mode.to_string());
    out.extend(target);
    out.extend(rest);
    out
}
