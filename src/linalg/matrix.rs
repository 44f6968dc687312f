use crate::linalg::errors::LinSysError;
use crate::linalg::vector::Vector;
use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul};
use strum_macros::EnumIter;

/// Norm selector for [`Matrix::norm`]. The variants keep the historical
/// order of the solver battery, so iterating the enum walks the norms in
/// the order the contraction search tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum NormKind {
    /// max |a_ij| over all entries
    MaxEntry,
    /// max_i Sum_j |a_ij| (infinity norm)
    RowSums,
    /// max_j Sum_i |a_ij| (1-norm), taken as the row sums of the transpose
    ColSums,
    /// sqrt(Sum |a_ij|). The absolute values are not squared before the
    /// root, so this is not the Frobenius norm; the contraction search in
    /// the fixed-point solver accepts or rejects norms by this exact value.
    RootedAbsSum,
}

/// A square dense matrix encapsulating a 2D array of reals and the
/// operations needed for solving linear systems. `size` is both the row
/// and the column count. Value semantics: construction takes ownership of
/// the rows and `Clone` makes an independent deep copy, so an algorithm's
/// working copy never aliases the caller's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    size: usize,
}

impl Matrix {
    /// Builds a matrix from its rows. The input must be non-empty and
    /// square: every row length must equal the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix, LinSysError> {
        let n = rows.len();
        if n == 0 {
            return Err(LinSysError::ShapeMismatch(0, 0));
        }
        for row in rows.iter() {
            if row.len() != n {
                return Err(LinSysError::ShapeMismatch(n, row.len()));
            }
        }
        Ok(Matrix { data: rows, size: n })
    }

    /// Zero matrix of the given size
    pub fn zeros(n: usize) -> Matrix {
        Matrix {
            data: vec![vec![0.0; n]; n],
            size: n,
        }
    }

    /// Unit matrix: ones on the diagonal, zeros elsewhere
    pub fn eye(n: usize) -> Matrix {
        let mut m = Matrix::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// i-th row as a new vector
    pub fn row(&self, i: usize) -> Vector {
        Vector::from_vec(self.data[i].clone())
    }

    /// j-th column as a new vector
    pub fn col(&self, j: usize) -> Vector {
        Vector::from_vec((0..self.size).map(|i| self.data[i][j]).collect())
    }

    /// Swaps the i-th and j-th rows in place
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    /// Contiguous principal sub-block of the given size starting at
    /// (offset, offset)
    pub fn block(&self, offset: usize, size: usize) -> Result<Matrix, LinSysError> {
        if offset + size > self.size {
            return Err(LinSysError::ShapeMismatch(self.size, offset + size));
        }
        let mut m = Matrix::zeros(size);
        for i in 0..size {
            for j in 0..size {
                m[(i, j)] = self.data[offset + i][offset + j];
            }
        }
        Ok(m)
    }

    /// Writes a smaller matrix back over the block starting at
    /// (offset, offset)
    pub fn insert_block(&mut self, offset: usize, block: &Matrix) -> Result<(), LinSysError> {
        if offset + block.size > self.size {
            return Err(LinSysError::ShapeMismatch(self.size, offset + block.size));
        }
        for i in 0..block.size {
            for j in 0..block.size {
                self.data[offset + i][offset + j] = block[(i, j)];
            }
        }
        Ok(())
    }

    /// Embeds the matrix into the bottom-right corner of an n-sized unit
    /// matrix, n >= size. Used to lift a reduced Householder reflection
    /// back to full dimension.
    pub fn extend(&self, n: usize) -> Result<Matrix, LinSysError> {
        if n < self.size {
            return Err(LinSysError::ShapeMismatch(n, self.size));
        }
        let d = n - self.size;
        let mut m = Matrix::eye(n);
        for i in 0..self.size {
            for j in 0..self.size {
                m[(d + i, d + j)] = self.data[i][j];
            }
        }
        Ok(m)
    }

    /// Matrix transposing. Returns a new matrix; applying it twice gives
    /// back the original.
    pub fn transpose(&self) -> Matrix {
        let n = self.size;
        let mut m = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                m[(i, j)] = self.data[j][i];
            }
        }
        m
    }

    fn check_size(&self, other: &Matrix) -> Result<(), LinSysError> {
        if self.size != other.size {
            return Err(LinSysError::ShapeMismatch(self.size, other.size));
        }
        Ok(())
    }

    /// Piecemeal sum of matrices
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinSysError> {
        self.check_size(other)?;
        let n = self.size;
        let mut r = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                r[(i, j)] = self.data[i][j] + other.data[i][j];
            }
        }
        Ok(r)
    }

    /// Piecemeal subtraction of matrices
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, LinSysError> {
        self.check_size(other)?;
        let n = self.size;
        let mut r = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                r[(i, j)] = self.data[i][j] - other.data[i][j];
            }
        }
        Ok(r)
    }

    /// Standard triple-loop matrix product, O(n^3)
    pub fn mul_matrix(&self, other: &Matrix) -> Result<Matrix, LinSysError> {
        self.check_size(other)?;
        let n = self.size;
        let mut r = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut s = 0.0;
                for k in 0..n {
                    s += self.data[i][k] * other.data[k][j];
                }
                r[(i, j)] = s;
            }
        }
        Ok(r)
    }

    /// Product with a column vector. Only multiplication on the right is
    /// defined.
    pub fn mul_vec(&self, v: &Vector) -> Result<Vector, LinSysError> {
        if self.size != v.len() {
            return Err(LinSysError::ShapeMismatch(self.size, v.len()));
        }
        let mut r = Vector::zeros(self.size);
        for i in 0..self.size {
            let mut s = 0.0;
            for j in 0..self.size {
                s += self.data[i][j] * v[j];
            }
            r[i] = s;
        }
        Ok(r)
    }

    /// Matrix norm in four realizations, see [`NormKind`]
    pub fn norm(&self, kind: NormKind) -> f64 {
        match kind {
            NormKind::MaxEntry => {
                let mut s: f64 = 0.0;
                for row in &self.data {
                    for a in row {
                        if a.abs() > s {
                            s = a.abs();
                        }
                    }
                }
                s
            }
            NormKind::RowSums => {
                let mut s: f64 = 0.0;
                for row in &self.data {
                    let sj: f64 = row.iter().map(|a| a.abs()).sum();
                    if sj > s {
                        s = sj;
                    }
                }
                s
            }
            NormKind::ColSums => self.transpose().norm(NormKind::RowSums),
            NormKind::RootedAbsSum => {
                let s: f64 = self.data.iter().flatten().map(|a| a.abs()).sum();
                s.sqrt()
            }
        }
    }
}

/// The product of a "row vector" by a "column vector" of equal length:
/// the (i, j) entry of the result is v1[i] * v2[j].
pub fn outer(v1: &Vector, v2: &Vector) -> Result<Matrix, LinSysError> {
    if v1.len() != v2.len() {
        return Err(LinSysError::ShapeMismatch(v1.len(), v2.len()));
    }
    let n = v1.len();
    let mut m = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            m[(i, j)] = v1[i] * v2[j];
        }
    }
    Ok(m)
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, k: f64) -> Matrix {
        let n = self.size;
        let mut r = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                r[(i, j)] = self.data[i][j] * k;
            }
        }
        r
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(self, k: f64) -> Matrix {
        &self * k
    }
}

/// Componentwise division by a scalar. A divisor of exactly zero is a
/// precondition violation the caller must avoid; it is not guarded.
impl Div<f64> for &Matrix {
    type Output = Matrix;
    fn div(self, k: f64) -> Matrix {
        let n = self.size;
        let mut r = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                r[(i, j)] = self.data[i][j] / k;
            }
        }
        r
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;
    fn div(self, k: f64) -> Matrix {
        &self / k
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i][j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            let row = row
                .iter()
                .map(|i| format!("{:.4}", i))
                .collect::<Vec<String>>();
            writeln!(f, "|{}|", row.join(",\t"))?;
        }
        Ok(())
    }
}
