use crate::linalg::errors::LinSysError;
use crate::linalg::matrix::Matrix;
use crate::linalg::vector::Vector;
use crate::solvers::pivoting::with_permutation;
use crate::solvers::substitution::{BotDiagSolve, TopDiagSolve};

/// LU decomposition by columnwise elimination. For each pivot column k
/// the multipliers L[(j, k)] = U[(j, k)] / U[(k, k)] are computed for all
/// rows from the diagonal down (the diagonal entry of L is computed like
/// any other, not assumed to be one), then the pivot row scaled by the
/// multiplier is subtracted from every trailing row of U. Returns (L, U)
/// with L*U == A. A zero pivot at any step is a
/// [`LinSysError::SingularPivot`]; the permutation applied by the public
/// solvers removes zeros from the diagonal beforehand where a row permits
/// it.
pub fn LU(a: &Matrix) -> Result<(Matrix, Matrix), LinSysError> {
    let n = a.size();
    let mut l = Matrix::zeros(n);
    let mut u = a.clone();
    for k in 0..n {
        let piv = u[(k, k)];
        if piv == 0.0 {
            return Err(LinSysError::SingularPivot(k));
        }
        for j in k..n {
            l[(j, k)] = u[(j, k)] / piv;
        }
        for i in (k + 1)..n {
            let m = l[(i, k)];
            for j in k..n {
                u[(i, j)] = u[(i, j)] - m * u[(k, j)];
            }
        }
    }
    Ok((l, u))
}

/// Solves the system A*x = b as follows: decompose A = L*U, get y from
/// L*y = b by forward substitution, then x from U*x = y by back
/// substitution.
pub fn SolveLU(A: &Matrix, b: &Vector) -> Result<Vector, LinSysError> {
    with_permutation(A, b, |a, bv| {
        let (l, u) = LU(&a)?;
        let y = BotDiagSolve(&l, &bv)?;
        TopDiagSolve(&u, &y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::relative_eq;
    use nalgebra::{DMatrix, DVector};
    use rand::Rng;

    fn residual(a: &Matrix, x: &Vector, b: &Vector) -> f64 {
        a.mul_vec(x).unwrap().sub(b).unwrap().norm()
    }

    #[test]
    fn test_LU_factors_reproduce_the_matrix() {
        let a = Matrix::from_rows(vec![
            vec![2.0, 1.0, 1.0],
            vec![4.0, -6.0, 0.0],
            vec![-2.0, 7.0, 2.0],
        ])
        .unwrap();
        let (l, u) = LU(&a).unwrap();
        let lu = l.mul_matrix(&u).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!(relative_eq!(lu[(i, j)], a[(i, j)], epsilon = 1e-9));
            }
            // L is lower triangular, U is upper triangular
            for j in (i + 1)..3 {
                assert_eq!(l[(i, j)], 0.0);
                assert!(relative_eq!(u[(j, i)], 0.0, epsilon = 1e-12));
            }
        }
    }

    #[test]
    fn test_SolveLU_two_by_two() {
        let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let b = Vector::from_vec(vec![3.0, 4.0]);
        let x = SolveLU(&a, &b).unwrap();
        assert!(relative_eq!(x[0], 1.0, epsilon = 1e-9));
        assert!(relative_eq!(x[1], 1.0, epsilon = 1e-9));
        assert!(residual(&a, &x, &b) < 1e-9);
    }

    #[test]
    fn test_SolveLU_pivoting_fires() {
        // zero in the top-left corner forces the row permutation
        let a = Matrix::from_rows(vec![
            vec![0.0, 2.0, 3.0],
            vec![1.0, 2.0, 4.0],
            vec![4.0, 5.0, 6.0],
        ])
        .unwrap();
        let b = Vector::from_vec(vec![13.0, 27.0, 32.0]);
        let x = SolveLU(&a, &b).unwrap();
        assert!(residual(&a, &x, &b) < 1e-9);

        let a_nalg = DMatrix::from_fn(3, 3, |i, j| a[(i, j)]);
        let b_nalg = DVector::from_fn(3, |i, _| b[i]);
        let expected = a_nalg.lu().solve(&b_nalg).unwrap();
        for i in 0..3 {
            assert!(relative_eq!(x[i], expected[i], epsilon = 1e-9));
        }
    }

    #[test]
    fn test_SolveLU_against_nalgebra_on_random_system() {
        let mut rng = rand::rng();
        let n = 6;
        let mut rows: Vec<Vec<f64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(-1.0..1.0)).collect())
            .collect();
        // dominant diagonal keeps the system comfortably nonsingular
        for (i, row) in rows.iter_mut().enumerate() {
            let s: f64 = row.iter().map(|v| v.abs()).sum();
            row[i] = s + 1.0;
        }
        let a = Matrix::from_rows(rows).unwrap();
        let b = Vector::from_vec((0..n).map(|_| rng.random_range(-5.0..5.0)).collect());
        let x = SolveLU(&a, &b).unwrap();
        assert!(residual(&a, &x, &b) < 1e-9);

        let a_nalg = DMatrix::from_fn(n, n, |i, j| a[(i, j)]);
        let b_nalg = DVector::from_fn(n, |i, _| b[i]);
        let expected = a_nalg.lu().solve(&b_nalg).unwrap();
        for i in 0..n {
            assert!(relative_eq!(x[i], expected[i], epsilon = 1e-9));
        }
    }

    #[test]
    fn test_singular_matrix_reports_pivot() {
        // the first row is zero from the diagonal rightward, the
        // permutation cannot repair it
        let a = Matrix::from_rows(vec![vec![0.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = Vector::from_vec(vec![1.0, 1.0]);
        assert_eq!(SolveLU(&a, &b), Err(LinSysError::SingularPivot(0)));
    }

    #[test]
    fn test_rank_deficient_matrix_reports_pivot() {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![3.0, 5.0, 7.0],
        ])
        .unwrap();
        match LU(&a) {
            Err(LinSysError::SingularPivot(_)) => {}
            other => panic!("expected a singular pivot, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::eye(2);
        let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(SolveLU(&a, &b), Err(LinSysError::ShapeMismatch(2, 3)));
    }
}
