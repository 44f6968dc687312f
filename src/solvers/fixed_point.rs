use crate::linalg::errors::LinSysError;
use crate::linalg::matrix::{Matrix, NormKind};
use crate::linalg::vector::Vector;
use crate::solvers::DEFAULT_MAX_ITERATIONS;
use crate::solvers::pivoting::with_permutation;
use log::{debug, error, info, warn};
use strum::IntoEnumIterator;

/// Searches the four norms in order for one certifying B = I - mu*A,
/// mu = 1/||A||, as a contraction (||B|| < 1 in the same norm). Returns
/// the iteration matrix together with mu and the accepted norm.
fn contraction_map(a: &Matrix) -> Result<Option<(Matrix, f64, NormKind)>, LinSysError> {
    let n = a.size();
    for kind in NormKind::iter() {
        let mu = 1.0 / a.norm(kind);
        let b = Matrix::eye(n).sub(&(a * mu))?;
        if b.norm(kind) < 1.0 {
            return Ok(Some((b, mu, kind)));
        }
    }
    Ok(None)
}

/// Fixed point iterative method for solving the system A*x = b.
/// Learn more -> https://en.wikipedia.org/wiki/Fixed-point_iteration
///
/// The system is recast as x = B*x + c with B certified as a contraction
/// by one of the four norms, which guarantees convergence to the unique
/// fixed point by the Banach theorem. When no norm works the system is replaced by its normal
/// equations (A^T*A, A^T*b; same solution set) and the search runs again;
/// if that also fails the solver gives up with
/// [`LinSysError::NormNotFound`].
///
/// Iterates x_{k+1} = B*x_k + c from x_0 = c = mu*b while the residual
/// ||A*x - b|| exceeds eps, up to [`DEFAULT_MAX_ITERATIONS`]. Returns the
/// solution and the number of iterations taken.
pub fn IterationSolve(A: &Matrix, b: &Vector, eps: f64) -> Result<(Vector, usize), LinSysError> {
    IterationSolveBounded(A, b, eps, DEFAULT_MAX_ITERATIONS)
}

/// Same as [`IterationSolve`] with an explicit iteration budget
pub fn IterationSolveBounded(
    A: &Matrix,
    b: &Vector,
    eps: f64,
    max_iterations: usize,
) -> Result<(Vector, usize), LinSysError> {
    with_permutation(A, b, |a, bv| fixed_point_loop(a, bv, eps, max_iterations))
}

fn fixed_point_loop(
    a: Matrix,
    bv: Vector,
    eps: f64,
    max_iterations: usize,
) -> Result<(Vector, usize), LinSysError> {
    let (mut a, mut bv) = (a, bv);
    let mut found = contraction_map(&a)?;
    if found.is_none() {
        warn!("no contraction norm for the system matrix, switching to the normal equations");
        let at = a.transpose();
        bv = at.mul_vec(&bv)?;
        a = at.mul_matrix(&a)?;
        found = contraction_map(&a)?;
    }
    let (B, mu, kind) = found.ok_or(LinSysError::NormNotFound)?;
    info!("contraction certified by the {:?} norm, mu = {}", kind, mu);

    let c = &bv * mu;
    let mut x = c.clone();
    let mut k: usize = 0;
    loop {
        let residual = a.mul_vec(&x)?.sub(&bv)?.norm();
        if !residual.is_finite() {
            error!("residual diverged to {} on iteration {}", residual, k);
            return Err(LinSysError::MaxIterationsReached(max_iterations));
        }
        if residual <= eps {
            info!("fixed point iteration converged, k = {}, residual = {}", k, residual);
            return Ok((x, k));
        }
        if k >= max_iterations {
            error!(
                "no convergence within {} iterations, residual = {}",
                max_iterations, residual
            );
            return Err(LinSysError::MaxIterationsReached(max_iterations));
        }
        x = B.mul_vec(&x)?.add(&c)?;
        k += 1;
        debug!("iteration = {}, residual = {}", k, residual);
    }
}
