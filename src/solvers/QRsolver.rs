use crate::linalg::errors::LinSysError;
use crate::linalg::matrix::{Matrix, outer};
use crate::linalg::vector::Vector;
use crate::solvers::pivoting::with_permutation;
use crate::solvers::substitution::TopDiagSolve;

/// Decomposes the matrix into an orthogonal matrix Q and an upper
/// triangular matrix R by Householder reflections.
/// Learn more - https://en.wikipedia.org/wiki/QR_decomposition . Each step takes the
/// trailing block, reflects its first column y onto a multiple of the
/// first basis vector with Q_i = I - 2*w*w^T, w = (y - ||y||*z)/||...||,
/// writes the reflected block back and lifts Q_i to full size. Q is the
/// product of the lifted reflections in construction order, so that
/// Q*R == A. A step whose column is already reduced (the reflector comes
/// out zero) is skipped.
pub fn QR(a: &Matrix) -> Result<(Matrix, Matrix), LinSysError> {
    let n = a.size();
    let mut r = a.clone();
    let mut steps: Vec<Matrix> = Vec::new();
    for i in 0..n.saturating_sub(1) {
        let m = n - i;
        let rc = r.block(i, m)?;
        let y = rc.col(0);
        let alpha = y.norm();
        let z = Vector::ort(m, 0);
        let w = y.sub(&(&z * alpha))?;
        let w_len = w.norm();
        if w_len == 0.0 {
            continue;
        }
        let w = w / w_len;
        let q_i = Matrix::eye(m).sub(&(&outer(&w, &w)? * 2.0))?;
        let r_i = q_i.mul_matrix(&rc)?;
        r.insert_block(i, &r_i)?;
        steps.push(q_i.extend(n)?);
    }
    let mut q = Matrix::eye(n);
    for step in &steps {
        q = q.mul_matrix(step)?;
    }
    Ok((q, r))
}

/// Solves the system A*x = b with the QR decomposition: y = Q^T * b, and
/// since R is upper triangular, R*x = y falls to back substitution. The
/// diagonal of R is nonzero whenever A is nonsingular.
pub fn QRSolve(A: &Matrix, b: &Vector) -> Result<Vector, LinSysError> {
    with_permutation(A, b, |a, bv| {
        let (q, r) = QR(&a)?;
        let y = q.transpose().mul_vec(&bv)?;
        TopDiagSolve(&r, &y)
    })
}
