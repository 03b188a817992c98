//! Fitted linear model and scoring.
//!
//! A model is nothing more than its coefficient vector:
//! `beta[0]` is the intercept and `beta[1..=p]` the feature coefficients, in
//! design-matrix column order.

use crate::error::StatsError;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    beta: Vec<f64>,
}

impl LinearModel {
    /// Wrap a coefficient vector (intercept first).
    pub fn new(beta: Vec<f64>) -> Self {
        Self { beta }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.beta
    }

    pub fn intercept(&self) -> Option<f64> {
        self.beta.first().copied()
    }

    /// Number of features the model expects (coefficients minus intercept).
    pub fn n_features(&self) -> usize {
        self.beta.len().saturating_sub(1)
    }

    /// Score feature rows: `yhat_i = beta[0] + Σ_j beta[j+1] * x_ij`.
    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>, StatsError> {
        let Some((&intercept, coefs)) = self.beta.split_first() else {
            return Err(StatsError::model("predict: empty model"));
        };

        x.iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != coefs.len() {
                    return Err(StatsError::dimension(format!(
                        "predict: feature dimension mismatch at row {} (expected {} columns, got {})",
                        i + 1,
                        coefs.len(),
                        row.len()
                    )));
                }
                Ok(intercept + dot(coefs, row))
            })
            .collect()
    }
}

impl From<Vec<f64>> for LinearModel {
    fn from(beta: Vec<f64>) -> Self {
        Self::new(beta)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(u, v)| u * v).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_applies_intercept_and_slopes() {
        let m = LinearModel::new(vec![2.0, 3.0]);
        let yhat = m.predict(&[vec![4.0], vec![0.0]]).unwrap();
        assert_eq!(yhat, vec![14.0, 2.0]);
    }

    #[test]
    fn predict_is_repeatable() {
        let m = LinearModel::new(vec![0.5, -1.25, 2.0]);
        let x = vec![vec![1.0, 2.0], vec![-3.0, 0.25]];
        assert_eq!(m.predict(&x).unwrap(), m.predict(&x).unwrap());
    }

    #[test]
    fn intercept_only_model_scores_empty_rows() {
        let m = LinearModel::new(vec![7.0]);
        assert_eq!(m.n_features(), 0);
        assert_eq!(m.predict(&[Vec::<f64>::new(), Vec::new()]).unwrap(), vec![7.0, 7.0]);
    }

    #[test]
    fn empty_model_is_a_model_error() {
        let err = LinearModel::new(vec![]).predict(&[vec![1.0]]).unwrap_err();
        assert!(matches!(err, StatsError::Model(_)));
    }

    #[test]
    fn wrong_feature_count_is_a_dimension_error() {
        let m = LinearModel::new(vec![1.0, 2.0]);
        let err = m.predict(&[vec![1.0], vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, StatsError::Dimension(_)));
        assert!(err.to_string().contains("at row 2"));
    }

    #[test]
    fn no_rows_gives_no_predictions() {
        let m = LinearModel::new(vec![1.0, 2.0]);
        assert!(m.predict(&[]).unwrap().is_empty());
    }
}
