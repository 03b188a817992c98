//! Ordinary least squares via the normal equations.
//!
//! Given a design matrix `X` (one row per observation, intercept excluded) and
//! targets `y`, we form the augmented rows `[1, x_1, ..., x_p]`, accumulate
//!
//! ```text
//! XtX[a][b] = Σ_i row_i[a] * row_i[b]
//! XtY[a]    = Σ_i row_i[a] * y_i
//! ```
//!
//! and solve `XtX β = XtY`. Rank-deficient designs (collinear features) make
//! `XtX` singular; that error is passed through untouched.

use crate::error::StatsError;
use crate::math::solve_linear;
use crate::models::LinearModel;

/// Normal-equations system `(XtX, XtY)` of size `p + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations {
    pub xtx: Vec<Vec<f64>>,
    pub xty: Vec<f64>,
}

/// Fit `y ≈ β0 + Σ βj x_j`.
pub fn fit_ols(x: &[Vec<f64>], y: &[f64]) -> Result<LinearModel, StatsError> {
    let system = normal_equations(x, y)?;
    log::debug!(
        "fit_ols: n={} p={} solving {}x{} normal equations",
        x.len(),
        system.xty.len() - 1,
        system.xty.len(),
        system.xty.len()
    );
    let beta = solve_linear(system.xtx, system.xty)?;
    Ok(LinearModel::new(beta))
}

/// Validate shapes and accumulate `XtX` / `XtY` with an implicit intercept column.
pub fn normal_equations(x: &[Vec<f64>], y: &[f64]) -> Result<NormalEquations, StatsError> {
    let Some(first) = x.first() else {
        return Err(StatsError::dimension("fit_ols: empty dataset"));
    };
    let p = first.len();
    if let Some(i) = x.iter().position(|r| r.len() != p) {
        return Err(StatsError::dimension(format!(
            "fit_ols: inconsistent feature dimension at row {} (expected {p}, got {})",
            i + 1,
            x[i].len()
        )));
    }
    if y.len() != x.len() {
        return Err(StatsError::dimension(format!(
            "fit_ols: y dimension mismatch ({} targets for {} rows)",
            y.len(),
            x.len()
        )));
    }

    let d = p + 1;
    let mut xtx = vec![vec![0.0; d]; d];
    let mut xty = vec![0.0; d];
    let mut row = vec![1.0; d];

    for (xi, &yi) in x.iter().zip(y) {
        row[1..].copy_from_slice(xi);
        for a in 0..d {
            xty[a] += row[a] * yi;
            for b in 0..d {
                xtx[a][b] += row[a] * row[b];
            }
        }
    }

    Ok(NormalEquations { xtx, xty })
}
