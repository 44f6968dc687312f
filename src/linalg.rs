/// vector and square matrix kernels shared by the direct and iterative solvers
pub mod matrix;
pub mod vector;

/// error taxonomy of the kernels and the solvers
pub mod errors;
