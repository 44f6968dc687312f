use crate::linalg::errors::LinSysError;
use crate::linalg::matrix::Matrix;
use crate::linalg::vector::Vector;
use log::debug;

/// Builds a row permutation matrix for the given matrix. Multiplying on
/// the left by the result moves zeros off the diagonal: for every zero
/// diagonal position the row is scanned rightward for a nonzero entry and
/// the corresponding rows of an identity accumulator are swapped. If some
/// row is zero from the diagonal to the end, that position stays
/// unrepaired and the downstream pivot check reports it.
pub fn getP(m: &Matrix) -> Matrix {
    let n = m.size();
    let mut p = Matrix::eye(n);
    for i in 0..n {
        if m[(i, i)] == 0.0 {
            for j in i..n {
                if m[(i, j)] != 0.0 {
                    debug!("zero on diagonal position {}, swapping rows {} and {}", i, i, j);
                    p.swap_rows(i, j);
                    break;
                }
            }
        }
    }
    p
}

/// Permutes (A, b) with [`getP`] before handing the system to the
/// underlying algorithm. Row permutation of both sides preserves the
/// solution set, so the algorithm's result is returned unchanged. Every
/// public solver starts with this call.
pub fn with_permutation<T, F>(A: &Matrix, b: &Vector, solve: F) -> Result<T, LinSysError>
where
    F: FnOnce(Matrix, Vector) -> Result<T, LinSysError>,
{
    if A.size() != b.len() {
        return Err(LinSysError::ShapeMismatch(A.size(), b.len()));
    }
    let p = getP(A);
    let pa = p.mul_matrix(A)?;
    let pb = p.mul_vec(b)?;
    solve(pa, pb)
}
