//! Terminal formatting for fit results.
//!
//! Formatting lives here so output changes stay out of the math code.

use crate::models::LinearModel;
use crate::report::FitQuality;

/// Multi-line summary: coefficients then in-sample diagnostics.
pub fn format_fit_summary(model: &LinearModel, quality: &FitQuality) -> String {
    let mut out = String::new();

    out.push_str("=== OLS fit ===\n");
    out.push_str(&format!(
        "Observations: {}  Features: {}\n",
        quality.n_obs, quality.n_features
    ));
    for (j, b) in model.coefficients().iter().enumerate() {
        let name = if j == 0 { "intercept".to_string() } else { format!("x{j}") };
        out.push_str(&format!("  {name:<10} {b:>18.10}\n"));
    }
    out.push_str(&format!("SSE:  {:.6}\n", quality.sse));
    out.push_str(&format!("RMSE: {:.6}\n", quality.rmse));
    match quality.r_squared {
        Some(r2) => out.push_str(&format!("R^2:  {r2:.6}\n")),
        None => out.push_str("R^2:  n/a (constant target)\n"),
    }

    out
}
