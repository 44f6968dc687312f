use crate::linalg::errors::LinSysError;
use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul};

/// A vector of real numbers with the operations needed by the solvers.
/// The length is fixed at construction; every binary operation demands
/// operands of equal length. Value semantics: `Clone` makes an independent
/// deep copy, algorithms never alias a caller's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    body: Vec<f64>,
}

impl Vector {
    /// Zero vector of length n
    pub fn zeros(n: usize) -> Vector {
        Vector { body: vec![0.0; n] }
    }

    pub fn from_vec(body: Vec<f64>) -> Vector {
        Vector { body }
    }

    /// e-th basis vector of length n
    pub fn ort(n: usize, e: usize) -> Vector {
        let mut v = Vector::zeros(n);
        v[e] = 1.0;
        v
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.body.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.body.as_slice()
    }

    fn check_len(&self, other: &Vector) -> Result<(), LinSysError> {
        if self.len() != other.len() {
            return Err(LinSysError::ShapeMismatch(self.len(), other.len()));
        }
        Ok(())
    }

    /// Piecemeal sum of vectors
    pub fn add(&self, other: &Vector) -> Result<Vector, LinSysError> {
        self.check_len(other)?;
        Ok(Vector::from_vec(
            self.body
                .iter()
                .zip(other.body.iter())
                .map(|(i, j)| i + j)
                .collect(),
        ))
    }

    /// Piecemeal subtraction of vectors
    pub fn sub(&self, other: &Vector) -> Result<Vector, LinSysError> {
        self.check_len(other)?;
        Ok(Vector::from_vec(
            self.body
                .iter()
                .zip(other.body.iter())
                .map(|(i, j)| i - j)
                .collect(),
        ))
    }

    /// Piecemeal multiplication of vectors (not a scalar product)
    pub fn mul(&self, other: &Vector) -> Result<Vector, LinSysError> {
        self.check_len(other)?;
        Ok(Vector::from_vec(
            self.body
                .iter()
                .zip(other.body.iter())
                .map(|(i, j)| i * j)
                .collect(),
        ))
    }

    /// Scalar product of vectors
    pub fn dot(&self, other: &Vector) -> Result<f64, LinSysError> {
        self.check_len(other)?;
        Ok(self
            .body
            .iter()
            .zip(other.body.iter())
            .map(|(i, j)| i * j)
            .sum())
    }

    /// Euclidean norm; the residual measure of every solver
    pub fn norm(&self) -> f64 {
        self.body.iter().map(|i| i * i).sum::<f64>().sqrt()
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        Vector::from_vec(self.body.iter().map(|i| i * k).collect())
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        &self * k
    }
}

/// Componentwise division by a scalar. A divisor of exactly zero is a
/// precondition violation the caller must avoid; it is not guarded.
impl Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, k: f64) -> Vector {
        Vector::from_vec(self.body.iter().map(|i| i / k).collect())
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, k: f64) -> Vector {
        &self / k
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.body[i]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.body[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body = self
            .body
            .iter()
            .map(|i| format!("{:.4}", i))
            .collect::<Vec<String>>();
        write!(f, "({})", body.join(", "))
    }
}
