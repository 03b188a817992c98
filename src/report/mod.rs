//! Reporting utilities: in-sample residuals and fit diagnostics.

pub mod format;

pub use format::*;

use crate::domain::Dataset;
use crate::error::StatsError;
use crate::models::LinearModel;

/// In-sample fit quality over the training rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FitQuality {
    pub n_obs: usize,
    pub n_features: usize,
    pub sse: f64,
    pub rmse: f64,
    /// Coefficient of determination. `None` when `y` has zero variance.
    pub r_squared: Option<f64>,
}

/// Residuals `y_i - yhat_i` for every training row.
pub fn compute_residuals(data: &Dataset, model: &LinearModel) -> Result<Vec<f64>, StatsError> {
    let yhat = model.predict(&data.x)?;
    Ok(data.y.iter().zip(&yhat).map(|(y, f)| y - f).collect())
}

pub fn fit_quality(data: &Dataset, model: &LinearModel) -> Result<FitQuality, StatsError> {
    let residuals = compute_residuals(data, model)?;
    let n = residuals.len();
    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    let rmse = if n == 0 { 0.0 } else { (sse / n as f64).sqrt() };

    let mean = data.y.iter().sum::<f64>() / n.max(1) as f64;
    let sst: f64 = data.y.iter().map(|y| (y - mean) * (y - mean)).sum();
    let r_squared = (sst > 0.0).then(|| 1.0 - sse / sst);

    Ok(FitQuality {
        n_obs: n,
        n_features: model.n_features(),
        sse,
        rmse,
        r_squared,
    })
}
