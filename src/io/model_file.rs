//! Read/write fitted model files.
//!
//! The on-disk shape is a tiny JSON-looking document:
//!
//! ```text
//! {
//!   "beta": [2.0000000000, 3.0000000000]
//! }
//! ```
//!
//! Coefficients are written fixed-point with `MODEL_DECIMALS` fractional digits
//! (intercept first). Loading does not parse JSON: it takes the first
//! bracketed list in the text and reads its comma-separated numbers, ignoring
//! whatever surrounds it.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::StatsError;
use crate::models::LinearModel;

/// Fractional digits used for coefficients and predictions.
pub const MODEL_DECIMALS: usize = 10;

/// Render a model as text.
pub fn format_model(model: &LinearModel) -> String {
    let values: Vec<String> = model
        .coefficients()
        .iter()
        .map(|v| format!("{v:.prec$}", prec = MODEL_DECIMALS))
        .collect();
    format!("{{\n  \"beta\": [{}]\n}}\n", values.join(", "))
}

/// Extract the coefficient list from model text.
pub fn parse_model(text: &str) -> Result<LinearModel, StatsError> {
    let open = text.find('[');
    let close = text[open.unwrap_or(0)..].find(']').map(|i| i + open.unwrap_or(0));
    let (Some(open), Some(close)) = (open, close) else {
        return Err(StatsError::model("bad model json: missing beta array"));
    };

    let mut beta = Vec::new();
    for tok in text[open + 1..close].split(',').map(str::trim) {
        if tok.is_empty() {
            continue;
        }
        match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => beta.push(v),
            _ => {
                return Err(StatsError::model(format!(
                    "bad model json: non-number token \"{tok}\" in beta array"
                )));
            }
        }
    }

    if beta.is_empty() {
        return Err(StatsError::model("bad model json: empty beta"));
    }
    Ok(LinearModel::new(beta))
}

pub fn write_model<W: Write>(mut out: W, model: &LinearModel) -> std::io::Result<()> {
    out.write_all(format_model(model).as_bytes())?;
    out.flush()
}

pub fn read_model<R: Read>(mut input: R) -> Result<LinearModel, StatsError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|e| StatsError::io("cannot read model", None, e))?;
    parse_model(&text)
}

/// Write a model file, replacing any existing file.
pub fn save_model(path: &Path, model: &LinearModel) -> Result<(), StatsError> {
    let file = File::create(path).map_err(|e| StatsError::io("cannot open for write", Some(path.to_path_buf()), e))?;
    write_model(file, model).map_err(|e| StatsError::io("cannot write model", Some(path.to_path_buf()), e))?;
    log::debug!("saved {} coefficients to {}", model.coefficients().len(), path.display());
    Ok(())
}

/// Load a model file written by `save_model` (or anything with one bracketed number list).
pub fn load_model(path: &Path) -> Result<LinearModel, StatsError> {
    let file = File::open(path).map_err(|e| StatsError::io("cannot open model", Some(path.to_path_buf()), e))?;
    read_model(file)
}
