use crate::linalg::matrix::Matrix;
use crate::linalg::vector::Vector;
use nalgebra::{DMatrix, DVector};
use strum_macros::EnumIter;

/// Conditioning knob of the fixed battery; the classic run uses 2
const N: f64 = 2.0;

/// A test system bundling the matrix, the free vector and the reference
/// solution the methods are compared against
pub struct TestSystem {
    pub name: String,
    pub A: Matrix,
    pub b: Vector,
    pub x_hat: Vector,
}

impl TestSystem {
    pub fn new(name: &str, rows: Vec<Vec<f64>>, b: Vec<f64>) -> TestSystem {
        let A = Matrix::from_rows(rows).expect("test system matrix must be square");
        let b = Vector::from_vec(b);
        let x_hat = reference_solution(&A, &b);
        TestSystem {
            name: name.to_string(),
            A,
            b,
            x_hat,
        }
    }
}

/// Ground-truth solution from an external solver (nalgebra's LU with
/// partial pivoting), used only to measure the accuracy of the methods
/// under comparison
pub fn reference_solution(A: &Matrix, b: &Vector) -> Vector {
    let n = A.size();
    let a_nalg = DMatrix::from_fn(n, n, |i, j| A[(i, j)]);
    let b_nalg = DVector::from_fn(n, |i, _| b[i]);
    let x = a_nalg
        .lu()
        .solve(&b_nalg)
        .expect("reference solver failed on a test system");
    Vector::from_vec(x.iter().cloned().collect())
}

/// The fixed battery of the comparison run
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum TestSystemKind {
    /// zero in the top-left corner, forces the permutation fix-up
    ZeroDiagonal,
    /// strictly diagonally dominant, comfortable for the iterative methods
    DiagonallyDominant,
    /// dominant with a negated diagonal
    NegativeDiagonal,
    /// large entries of mixed signs off the diagonal
    MixedSigns,
    /// symmetric and diagonally dominant
    SymmetricDominant,
}

impl TestSystemKind {
    pub fn system(&self) -> TestSystem {
        match self {
            TestSystemKind::ZeroDiagonal => TestSystem::new(
                "zero diagonal",
                vec![
                    vec![0.0, 2.0, 3.0],
                    vec![1.0, 2.0, 4.0],
                    vec![4.0, 5.0, 6.0],
                ],
                vec![13.0, 27.0, 32.0],
            ),
            TestSystemKind::DiagonallyDominant => TestSystem::new(
                "diagonally dominant",
                vec![
                    vec![N + 2.0, 1.0, 1.0],
                    vec![1.0, N + 4.0, 1.0],
                    vec![1.0, 1.0, N + 6.0],
                ],
                vec![N + 4.0, N + 6.0, N + 8.0],
            ),
            TestSystemKind::NegativeDiagonal => TestSystem::new(
                "negative diagonal",
                vec![
                    vec![-(N + 2.0), 1.0, 1.0],
                    vec![1.0, -(N + 4.0), 1.0],
                    vec![1.0, 1.0, -(N + 6.0)],
                ],
                vec![-(N + 4.0), -(N + 6.0), -(N + 8.0)],
            ),
            TestSystemKind::MixedSigns => TestSystem::new(
                "mixed signs",
                vec![
                    vec![-(N + 2.0), N + 3.0, N + 4.0],
                    vec![N + 5.0, -(N + 4.0), N + 1.0],
                    vec![N + 4.0, N + 5.0, -(N + 6.0)],
                ],
                vec![N + 4.0, N + 6.0, N + 8.0],
            ),
            TestSystemKind::SymmetricDominant => TestSystem::new(
                "symmetric dominant",
                vec![
                    vec![N + 2.0, N + 1.0, N + 1.0],
                    vec![N + 1.0, N + 4.0, N + 1.0],
                    vec![N + 1.0, N + 1.0, N + 6.0],
                ],
                vec![N + 4.0, N + 6.0, N + 8.0],
            ),
        }
    }
}

/// Weakly conditioned system of the given size: the unit matrix with -1
/// above the diagonal, shifted by a one-signed perturbation of magnitude
/// N*eps. The smaller eps is, the closer the matrix sits to its singular
/// triangular limit.
pub fn ill_conditioned(n: usize, eps: f64) -> TestSystem {
    let mut a1 = Matrix::eye(n);
    for i in 0..n {
        for j in (i + 1)..n {
            a1[(i, j)] = -1.0;
        }
    }
    let mut a2 = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            a2[(i, j)] = if j > i { -1.0 } else { 1.0 };
        }
    }
    let a = a1
        .add(&(&a2 * (N * eps)))
        .expect("generator blocks share one size");
    let mut b = vec![-1.0; n];
    b[n - 1] = 1.0;
    let b = Vector::from_vec(b);
    let x_hat = reference_solution(&a, &b);
    TestSystem {
        name: format!("ill conditioned n={} eps={:e}", n, eps),
        A: a,
        b,
        x_hat,
    }
}
