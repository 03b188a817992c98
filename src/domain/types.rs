//! Shared domain types.
//!
//! - `Table`: raw numeric rows as read from a headerless CSV
//! - `Dataset`: a table split into target vector and design matrix
//! - run configs produced from CLI arguments

use std::path::PathBuf;

use crate::error::StatsError;

/// Rows of `f64` values in file order.
///
/// Rows are not required to share a column count here; consumers check that
/// when they need it (`split_target`, the predictor).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split a training table into `(y, X)` using column 0 as the target.
    ///
    /// Every row must have the first row's column count, and that count must
    /// be at least 2 (target plus one feature).
    pub fn split_target(&self) -> Result<Dataset, StatsError> {
        let Some(first) = self.rows.first() else {
            return Err(StatsError::dimension("fit: empty dataset"));
        };
        let m = first.len();
        if m < 2 {
            return Err(StatsError::dimension("fit: need at least 2 columns: y and x1"));
        }

        let mut y = Vec::with_capacity(self.rows.len());
        let mut x = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != m {
                return Err(StatsError::dimension(format!(
                    "fit: inconsistent column count at line {}",
                    i + 1
                )));
            }
            y.push(row[0]);
            x.push(row[1..].to_vec());
        }

        Ok(Dataset { y, x })
    }
}

impl From<Vec<Vec<f64>>> for Table {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}

/// Target vector plus design matrix (intercept column excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub y: Vec<f64>,
    pub x: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn n_obs(&self) -> usize {
        self.y.len()
    }

    pub fn n_features(&self) -> usize {
        self.x.first().map_or(0, Vec::len)
    }
}

/// Resolved settings for a `fit` run.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub train_csv: PathBuf,
    pub model_out: PathBuf,
    /// Print training diagnostics (RMSE, R²) after fitting.
    pub summary: bool,
}

/// Resolved settings for an `apply` run.
#[derive(Debug, Clone)]
pub struct ApplyConfig {
    pub model: PathBuf,
    pub input_csv: PathBuf,
    pub predictions_out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_target_takes_first_column_as_y() {
        let table = Table::new(vec![vec![5.0, 1.0, 10.0], vec![8.0, 2.0, 20.0]]);
        let data = table.split_target().unwrap();
        assert_eq!(data.y, vec![5.0, 8.0]);
        assert_eq!(data.x, vec![vec![1.0, 10.0], vec![2.0, 20.0]]);
        assert_eq!(data.n_obs(), 2);
        assert_eq!(data.n_features(), 2);
    }

    #[test]
    fn split_target_rejects_ragged_rows() {
        let table = Table::new(vec![vec![5.0, 1.0], vec![8.0, 2.0, 3.0]]);
        let err = table.split_target().unwrap_err();
        assert!(matches!(err, StatsError::Dimension(_)));
        assert_eq!(err.to_string(), "fit: inconsistent column count at line 2");
    }

    #[test]
    fn split_target_needs_a_feature_column() {
        let table = Table::new(vec![vec![5.0], vec![8.0]]);
        let err = table.split_target().unwrap_err();
        assert!(matches!(err, StatsError::Dimension(_)));
    }

    #[test]
    fn split_target_rejects_empty_table() {
        let err = Table::default().split_target().unwrap_err();
        assert_eq!(err.to_string(), "fit: empty dataset");
    }
}
