//! Dense linear system solver.
//!
//! Solves `A x = b` by Gaussian elimination with partial pivoting followed by
//! back substitution. The systems we see are the normal equations of small
//! regressions (`p + 1` unknowns), so a plain `Vec<Vec<f64>>` is fine.
//!
//! Both thresholds are absolute and fixed; they are not scaled by the
//! magnitude of `A`.

use crate::error::StatsError;

/// Pivots with magnitude below this are treated as zero (singular system).
pub const PIVOT_EPS: f64 = 1e-15;

/// Elimination multipliers below this are treated as zero and the row is left alone.
pub const ELIM_EPS: f64 = 1e-18;

/// Solve `A x = b`.
///
/// `a` and `b` are taken by value and destroyed during elimination; clone at
/// the call site if the originals are still needed.
pub fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>, StatsError> {
    let n = a.len();
    if n == 0 {
        return Err(StatsError::dimension("solve_linear: empty matrix"));
    }
    if a.iter().any(|row| row.len() != n) {
        return Err(StatsError::dimension("solve_linear: matrix not square"));
    }
    if b.len() != n {
        return Err(StatsError::dimension("solve_linear: dimension mismatch"));
    }

    for i in 0..n {
        let piv = pivot_row(&a, i);
        if a[piv][i].abs() < PIVOT_EPS {
            return Err(StatsError::SingularMatrix(
                "solve_linear: singular matrix (near-zero pivot)".to_string(),
            ));
        }
        if piv != i {
            log::trace!("solve_linear: swap rows {i} <-> {piv}");
            a.swap(piv, i);
            b.swap(piv, i);
        }

        let (upper, lower) = a.split_at_mut(i + 1);
        let pivot = &upper[i];
        for (off, row) in lower.iter_mut().enumerate() {
            let f = row[i] / pivot[i];
            if f.abs() < ELIM_EPS {
                continue;
            }
            for c in i..n {
                row[c] -= f * pivot[c];
            }
            b[i + 1 + off] -= f * b[i];
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|c| a[i][c] * x[c]).sum();
        x[i] = (b[i] - tail) / a[i][i];
    }
    Ok(x)
}

/// Row index `r >= col` with the largest `|a[r][col]|`; the first maximum wins.
fn pivot_row(a: &[Vec<f64>], col: usize) -> usize {
    let mut piv = col;
    let mut best = a[col][col].abs();
    for (r, row) in a.iter().enumerate().skip(col + 1) {
        let v = row[col].abs();
        if v > best {
            best = v;
            piv = r;
        }
    }
    piv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn solves_small_system() {
        // 2x + y = 5, x + 3y = 10  ->  x = 1, y = 3
        let x = solve_linear(vec![vec![2.0, 1.0], vec![1.0, 3.0]], vec![5.0, 10.0]).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_leading_entry_needs_a_row_swap() {
        let x = solve_linear(vec![vec![0.0, 1.0], vec![1.0, 0.0]], vec![7.0, 4.0]).unwrap();
        assert_abs_diff_eq!(x[0], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 7.0, epsilon = 1e-12);
    }

    #[test]
    fn pivot_tie_keeps_lowest_row() {
        let a = vec![vec![2.0, 1.0], vec![-2.0, 3.0], vec![2.0, 5.0]];
        assert_eq!(pivot_row(&a, 0), 0);
        let a = vec![vec![1.0, 1.0], vec![-3.0, 3.0], vec![3.0, 5.0]];
        assert_eq!(pivot_row(&a, 0), 1);
    }

    #[test]
    fn singular_matrix_is_detected() {
        let err = solve_linear(vec![vec![1.0, 2.0], vec![2.0, 4.0]], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, StatsError::SingularMatrix(_)));
    }

    #[test]
    fn tiny_pivot_below_threshold_is_singular() {
        let err = solve_linear(vec![vec![1e-16]], vec![1.0]).unwrap_err();
        assert!(matches!(err, StatsError::SingularMatrix(_)));

        let x = solve_linear(vec![vec![1e-14]], vec![1e-14]).unwrap();
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn negligible_multiplier_leaves_row_untouched() {
        // f = 1e-20 is below ELIM_EPS. Subtracting f * 1e10 from row 1 would
        // turn its diagonal into 1 - 1e-10 and shift x[0] by about 1.
        let b = vec![0.0, 1.0];
        let skipped = solve_linear(vec![vec![1.0, 1e10], vec![1e-20, 1.0]], b.clone()).unwrap();
        let zeroed = solve_linear(vec![vec![1.0, 1e10], vec![0.0, 1.0]], b.clone()).unwrap();
        assert_eq!(skipped, zeroed);
        assert_eq!(skipped, vec![-1e10, 1.0]);

        // Just above the threshold the row is eliminated and the answer moves.
        let eliminated = solve_linear(vec![vec![1.0, 1e10], vec![1e-17, 1.0]], b).unwrap();
        assert_ne!(eliminated, zeroed);
        assert_abs_diff_eq!(eliminated[1], 1.0 / (1.0 - 1e-7), epsilon = 1e-15);
    }

    #[test]
    fn shape_violations_are_dimension_errors() {
        assert!(matches!(solve_linear(vec![], vec![]), Err(StatsError::Dimension(_))));
        assert!(matches!(
            solve_linear(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0]),
            Err(StatsError::Dimension(_))
        ));
        assert!(matches!(
            solve_linear(vec![vec![1.0, 0.0], vec![0.0, 1.0]], vec![1.0]),
            Err(StatsError::Dimension(_))
        ));
    }

    #[test]
    fn caller_data_survives_when_cloned_in() {
        let a = vec![vec![4.0, 1.0], vec![1.0, 3.0]];
        let b = vec![1.0, 2.0];
        let x1 = solve_linear(a.clone(), b.clone()).unwrap();
        let x2 = solve_linear(a.clone(), b.clone()).unwrap();
        assert_eq!(x1, x2);
        assert_eq!(a, vec![vec![4.0, 1.0], vec![1.0, 3.0]]);
        assert_eq!(b, vec![1.0, 2.0]);
    }

    #[test]
    fn agrees_with_nalgebra_lu_on_random_systems() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=6 {
            // Diagonally dominant, so comfortably non-singular.
            let mut a = vec![vec![0.0; n]; n];
            for (i, row) in a.iter_mut().enumerate() {
                for v in row.iter_mut() {
                    *v = rng.gen_range(-1.0..1.0);
                }
                row[i] += n as f64 + 1.0;
            }
            let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();

            let ours = solve_linear(a.clone(), b.clone()).unwrap();

            let flat: Vec<f64> = a.iter().flatten().copied().collect();
            let m = nalgebra::DMatrix::from_row_slice(n, n, &flat);
            let rhs = nalgebra::DVector::from_column_slice(&b);
            let reference = m.lu().solve(&rhs).unwrap();

            for i in 0..n {
                assert_abs_diff_eq!(ours[i], reference[i], epsilon = 1e-9);
            }
        }
    }
}
