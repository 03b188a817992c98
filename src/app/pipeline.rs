//! Fit and apply workflows, independent of how results are printed.
//!
//! fit:   read CSV -> split y / X -> OLS -> [diagnostics] -> save model
//! apply: load model -> read CSV -> predict -> write predictions

use crate::domain::{ApplyConfig, FitConfig};
use crate::error::AppError;
use crate::fit::fit_ols;
use crate::io::{load_model, read_table_path, save_model, write_predictions_path};
use crate::models::LinearModel;
use crate::report::{FitQuality, fit_quality};

/// Outputs of a single `fit` run.
#[derive(Debug, Clone)]
pub struct FitRun {
    pub model: LinearModel,
    /// In-sample diagnostics, only computed when `config.summary` is set.
    pub quality: Option<FitQuality>,
}

/// Outputs of a single `apply` run.
#[derive(Debug, Clone)]
pub struct ApplyRun {
    pub model: LinearModel,
    pub predictions: Vec<f64>,
}

pub fn run_fit(config: &FitConfig) -> Result<FitRun, AppError> {
    let table = read_table_path(&config.train_csv, false)?;
    let data = table.split_target()?;
    log::info!(
        "fitting {} rows x {} features from {}",
        data.n_obs(),
        data.n_features(),
        config.train_csv.display()
    );

    let model = fit_ols(&data.x, &data.y)?;
    let quality = if config.summary {
        Some(fit_quality(&data, &model)?)
    } else {
        None
    };
    save_model(&config.model_out, &model)?;
    log::info!("wrote model to {}", config.model_out.display());

    Ok(FitRun { model, quality })
}

pub fn run_apply(config: &ApplyConfig) -> Result<ApplyRun, AppError> {
    let model = load_model(&config.model)?;
    let table = read_table_path(&config.input_csv, false)?;
    log::info!(
        "scoring {} rows with a {}-feature model",
        table.len(),
        model.n_features()
    );

    let predictions = model.predict(&table.rows)?;
    write_predictions_path(&config.predictions_out, &predictions)?;

    Ok(ApplyRun { model, predictions })
}
