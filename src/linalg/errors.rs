use std::fmt;

/// Error types shared by the matrix/vector kernels and the solvers
#[derive(Debug, Clone, PartialEq)]
pub enum LinSysError {
    /// operand sizes do not agree; carries both sizes
    ShapeMismatch(usize, usize),
    /// a zero diagonal pivot was reached during elimination or triangular
    /// substitution at the given position
    SingularPivot(usize),
    /// no norm certifies the iteration matrix as a contraction, even after
    /// the normal-equations fallback
    NormNotFound,
    /// the iterative solver exhausted its iteration budget
    MaxIterationsReached(usize),
}

impl fmt::Display for LinSysError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinSysError::ShapeMismatch(shape1, shape2) => {
                write!(f, "shapes incompatible ({}, {})", shape1, shape2)
            }
            LinSysError::SingularPivot(i) => {
                write!(f, "zero pivot on diagonal position {}", i)
            }
            LinSysError::NormNotFound => write!(f, "no contraction norm found"),
            LinSysError::MaxIterationsReached(k) => {
                write!(f, "no convergence within {} iterations", k)
            }
        }
    }
}

impl std::error::Error for LinSysError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            LinSysError::ShapeMismatch(3, 2).to_string(),
            "shapes incompatible (3, 2)"
        );
        assert_eq!(
            LinSysError::SingularPivot(1).to_string(),
            "zero pivot on diagonal position 1"
        );
        assert_eq!(LinSysError::NormNotFound.to_string(), "no contraction norm found");
        assert_eq!(
            LinSysError::MaxIterationsReached(100).to_string(),
            "no convergence within 100 iterations"
        );
    }
}
