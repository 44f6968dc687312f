/// battery of test systems with reference solutions and a parametric
/// weakly conditioned generator
pub mod test_systems;

/// comparison tables of accuracy and iteration counts across the four
/// solvers
pub mod comparison;
