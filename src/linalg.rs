//! Dense linear-algebra algorithms on the fixed-size containers.
//!
//! Everything here is a pure function: the input matrix is never modified
//! and the result is deterministic under the usual floating-point caveats.
//!
//! The decomposition is Doolittle's LU *without pivoting*. A zero (or
//! numerically vanished) pivot on `U`'s diagonal makes the division in the
//! lower-triangle step produce `inf`/`nan`, which then propagates silently —
//! there is deliberately no runtime guard. Callers needing a hard guarantee
//! must establish non-singularity (and LU-without-pivoting admissibility)
//! beforehand; diagonally dominant matrices always qualify.

use crate::matrix::Matrix;
use crate::view::VectorView;
use num_traits::Float;

/// The `M x M` identity matrix.
pub fn identity<T: Float, const M: usize>() -> Matrix<T, M, M> {
    Matrix::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
}

/// Doolittle LU decomposition without pivoting.
///
/// Returns `(lower, upper)` with `lower` unit-lower-triangular and `upper`
/// upper-triangular such that `lower * upper == mat` exactly when no zero
/// pivot was encountered along the way.
pub fn decompose_lu<T: Float, const M: usize>(
    mat: &Matrix<T, M, M>,
) -> (Matrix<T, M, M>, Matrix<T, M, M>) {
    let mut lower: Matrix<T, M, M> = Matrix::from_fn(|_, _| T::zero());
    let mut upper: Matrix<T, M, M> = Matrix::from_fn(|_, _| T::zero());

    for i in 0..M {
        // Upper triangle: U(i, k) = A(i, k) - sum_j L(i, j) * U(j, k)
        for k in i..M {
            let mut sum = T::zero();
            for j in 0..i {
                sum = sum + lower[(i, j)] * upper[(j, k)];
            }
            upper[(i, k)] = mat[(i, k)] - sum;
        }
        // Lower triangle: unit diagonal, then
        // L(k, i) = (A(k, i) - sum_j L(k, j) * U(j, i)) / U(i, i)
        for k in i..M {
            if i == k {
                lower[(i, i)] = T::one();
            } else {
                let mut sum = T::zero();
                for j in 0..i {
                    sum = sum + lower[(k, j)] * upper[(j, i)];
                }
                // Division by a zero pivot is the documented failure mode.
                lower[(k, i)] = (mat[(k, i)] - sum) / upper[(i, i)];
            }
        }
    }
    (lower, upper)
}

/// Determinant via LU: the product of `U`'s diagonal.
pub fn det<T: Float, const M: usize>(mat: &Matrix<T, M, M>) -> T {
    let (_, upper) = decompose_lu(mat);
    // The diagonal of a row-major M x M buffer is a stride M+1 lane whose
    // extent ends at the last element of the storage.
    let diag = unsafe { VectorView::new_unchecked(upper.as_slice(), 0, M, M as isize + 1) };
    diag.iter().fold(T::one(), |acc, &d| acc * d)
}

/// Inverse via LU: closed-form substitution gives `L⁻¹` and `U⁻¹`, and
/// `A⁻¹ = U⁻¹ · L⁻¹`.
///
/// Shares the decomposition's precondition: a singular input (or one that
/// does not admit LU without pivoting) yields `inf`/`nan` entries rather
/// than an error.
pub fn inv<T: Float, const M: usize>(mat: &Matrix<T, M, M>) -> Matrix<T, M, M> {
    let (lower, upper) = decompose_lu(mat);
    let mut lower_inv: Matrix<T, M, M> = Matrix::from_fn(|_, _| T::zero());
    let mut upper_inv: Matrix<T, M, M> = Matrix::from_fn(|_, _| T::zero());

    // Forward substitution down each column of L⁻¹.
    for j in 0..M {
        for i in j..M {
            if i == j {
                lower_inv[(i, j)] = T::one() / lower[(i, j)];
            } else {
                let mut s = T::zero();
                for k in j..i {
                    s = s + lower[(i, k)] * lower_inv[(k, j)];
                }
                lower_inv[(i, j)] = -lower_inv[(j, j)] * s;
            }
        }
    }
    // Back substitution up each column of U⁻¹.
    for j in 0..M {
        for i in (0..=j).rev() {
            if i == j {
                upper_inv[(i, j)] = T::one() / upper[(i, j)];
            } else {
                let mut s = T::zero();
                for k in (i + 1)..=j {
                    s = s + upper[(i, k)] * upper_inv[(k, j)];
                }
                upper_inv[(i, j)] = -(T::one() / upper[(i, i)]) * s;
            }
        }
    }
    upper_inv.matmul(&lower_inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq<const M: usize, const N: usize>(
        a: &Matrix<f64, M, N>,
        b: &Matrix<f64, M, N>,
        eps: f64,
    ) {
        for r in 0..M {
            for c in 0..N {
                assert_relative_eq!(a[(r, c)], b[(r, c)], epsilon = eps, max_relative = eps);
            }
        }
    }

    #[test]
    fn test_identity_det_is_one() {
        let id = identity::<f64, 5>();
        assert_relative_eq!(det(&id), 1.0);
    }

    #[test]
    fn test_lu_reconstructs() {
        let a = Matrix::new([[4.0, 3.0], [6.0, 3.0]]);
        let (l, u) = decompose_lu(&a);
        assert_relative_eq!(l[(0, 0)], 1.0);
        assert_relative_eq!(l[(1, 1)], 1.0);
        assert_relative_eq!(l[(0, 1)], 0.0);
        assert_relative_eq!(u[(1, 0)], 0.0);
        assert_matrix_eq(&l.matmul(&u), &a, 1e-12);
    }

    #[test]
    fn test_det_known_values() {
        let a = Matrix::new([[3.0, 8.0], [4.0, 6.0]]);
        assert_relative_eq!(det(&a), -14.0, epsilon = 1e-12);

        let b = Matrix::new([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_relative_eq!(det(&b), -306.0, epsilon = 1e-9);
    }

    #[test]
    fn test_det_scales_with_row_scaling() {
        let a = Matrix::new([[2.0, 1.0], [1.0, 3.0]]);
        let scaled = Matrix::new([[4.0, 2.0], [1.0, 3.0]]);
        assert_relative_eq!(det(&scaled), 2.0 * det(&a), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let a = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
        let ainv = inv(&a);
        assert_matrix_eq(&a.matmul(&ainv), &identity::<f64, 2>(), 1e-12);
        assert_matrix_eq(&ainv.matmul(&a), &identity::<f64, 2>(), 1e-12);
    }

    #[test]
    fn test_dependent_rows_give_zero_det() {
        // Row 2 = 2 * row 0: singular, but the elimination still runs to
        // completion with finite arithmetic and a zero on U's diagonal.
        let a = Matrix::new([[1.0, 2.0, 3.0], [2.0, 5.0, 7.0], [2.0, 4.0, 6.0]]);
        assert_relative_eq!(det(&a), 0.0, epsilon = 1e-12);
    }
}
