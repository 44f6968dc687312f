use crate::linalg::errors::LinSysError;
use crate::linalg::matrix::Matrix;
use crate::linalg::vector::Vector;
use crate::solvers::DEFAULT_MAX_ITERATIONS;
use crate::solvers::pivoting::with_permutation;
use log::{debug, error, info};

/// Relaxation method for solving the system A*x = b, carried under the
/// historical name of Seidel's method.
/// Learn more -> https://en.wikipedia.org/wiki/Gauss%E2%80%93Seidel_method The system is first replaced by
/// its normal equations (A^T*A, A^T*b; symmetric, same solution set),
/// then recast as x = C*x + d with d[i] = b[i]/A[(i, i)] and
/// C[(i, j)] = -A[(i, j)]/A[(i, i)] off the diagonal, zero on it.
///
/// Every sweep computes all components from the previous sweep's iterate,
/// so the update is simultaneous rather than the sequential
/// freshly-updated-components scheme the classical name suggests; the
/// scheme is kept as is.
///
/// Iterates from x_0 = d while the residual ||A*x - b|| exceeds eps, up
/// to [`DEFAULT_MAX_ITERATIONS`]. Returns the solution and the number of
/// iterations taken.
pub fn SeidelSolve(A: &Matrix, b: &Vector, eps: f64) -> Result<(Vector, usize), LinSysError> {
    SeidelSolveBounded(A, b, eps, DEFAULT_MAX_ITERATIONS)
}

/// Same as [`SeidelSolve`] with an explicit iteration budget
pub fn SeidelSolveBounded(
    A: &Matrix,
    b: &Vector,
    eps: f64,
    max_iterations: usize,
) -> Result<(Vector, usize), LinSysError> {
    with_permutation(A, b, |a, bv| relaxation_loop(a, bv, eps, max_iterations))
}

fn relaxation_loop(
    a: Matrix,
    bv: Vector,
    eps: f64,
    max_iterations: usize,
) -> Result<(Vector, usize), LinSysError> {
    let at = a.transpose();
    let bv = at.mul_vec(&bv)?;
    let a = at.mul_matrix(&a)?;
    let n = a.size();

    let mut d = Vector::zeros(n);
    let mut c = Matrix::zeros(n);
    for i in 0..n {
        if a[(i, i)] == 0.0 {
            return Err(LinSysError::SingularPivot(i));
        }
        d[i] = bv[i] / a[(i, i)];
        for j in 0..n {
            if i != j {
                c[(i, j)] = -(a[(i, j)] / a[(i, i)]);
            }
        }
    }

    let mut x = d.clone();
    let mut k: usize = 0;
    loop {
        let residual = a.mul_vec(&x)?.sub(&bv)?.norm();
        if !residual.is_finite() {
            error!("residual diverged to {} on iteration {}", residual, k);
            return Err(LinSysError::MaxIterationsReached(max_iterations));
        }
        if residual <= eps {
            info!("relaxation converged, k = {}, residual = {}", k, residual);
            return Ok((x, k));
        }
        if k >= max_iterations {
            error!(
                "no convergence within {} iterations, residual = {}",
                max_iterations, residual
            );
            return Err(LinSysError::MaxIterationsReached(max_iterations));
        }
        // every row of the sweep reads the iterate of the previous sweep
        let mut next = Vector::zeros(n);
        for i in 0..n {
            next[i] = c.row(i).dot(&x)? + d[i];
        }
        x = next;
        k += 1;
        debug!("iteration = {}, residual = {}", k, residual);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::relative_eq;

    fn residual(a: &Matrix, x: &Vector, b: &Vector) -> f64 {
        a.mul_vec(x).unwrap().sub(b).unwrap().norm()
    }

    #[test]
    fn test_converges_on_a_strongly_dominant_system() {
        let a = Matrix::from_rows(vec![
            vec![10.0, 1.0, 0.0],
            vec![1.0, 12.0, 1.0],
            vec![0.0, 1.0, 9.0],
        ])
        .unwrap();
        // b = A * (1, 1, 1)
        let b = Vector::from_vec(vec![11.0, 14.0, 10.0]);
        let eps = 1e-6;
        let (x, k) = SeidelSolve(&a, &b, eps).unwrap();
        assert!(residual(&a, &x, &b) <= eps);
        assert!(k > 0);
        for i in 0..3 {
            assert!(relative_eq!(x[i], 1.0, epsilon = 1e-4));
        }
    }

    #[test]
    fn test_iteration_count_grows_with_tighter_eps() {
        let a = Matrix::from_rows(vec![
            vec![10.0, 1.0, 0.0],
            vec![1.0, 12.0, 1.0],
            vec![0.0, 1.0, 9.0],
        ])
        .unwrap();
        let b = Vector::from_vec(vec![11.0, 14.0, 10.0]);
        let (_x1, k1) = SeidelSolve(&a, &b, 1e-3).unwrap();
        let (_x2, k2) = SeidelSolve(&a, &b, 1e-9).unwrap();
        assert!(k2 > k1);
    }

    #[test]
    fn test_zero_column_reports_singular_pivot() {
        // a zero column of A leaves a zero on the diagonal of A^T*A
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
        let b = Vector::from_vec(vec![1.0, 2.0]);
        assert_eq!(
            SeidelSolve(&a, &b, 1e-6),
            Err(LinSysError::SingularPivot(0))
        );
    }

    #[test]
    fn test_iteration_budget_is_enforced() {
        let a = Matrix::from_rows(vec![
            vec![10.0, 1.0, 0.0],
            vec![1.0, 12.0, 1.0],
            vec![0.0, 1.0, 9.0],
        ])
        .unwrap();
        let b = Vector::from_vec(vec![11.0, 14.0, 10.0]);
        assert_eq!(
            SeidelSolveBounded(&a, &b, 1e-12, 1),
            Err(LinSysError::MaxIterationsReached(1))
        );
    }
}
