//! Write predictions as plain text, one value per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::StatsError;
use crate::io::model_file::MODEL_DECIMALS;

pub fn write_predictions<W: Write>(mut out: W, yhat: &[f64]) -> std::io::Result<()> {
    for v in yhat {
        writeln!(out, "{v:.prec$}", prec = MODEL_DECIMALS)?;
    }
    out.flush()
}

/// Write predictions to `path`, replacing any existing file.
pub fn write_predictions_path(path: &Path, yhat: &[f64]) -> Result<(), StatsError> {
    let file = File::create(path).map_err(|e| StatsError::io("cannot open for write", Some(path.to_path_buf()), e))?;
    write_predictions(BufWriter::new(file), yhat)
        .map_err(|e| StatsError::io("cannot write predictions", Some(path.to_path_buf()), e))
}
