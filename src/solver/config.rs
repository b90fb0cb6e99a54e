use crate::solver::constants::DEFAULT_TARGET;

/// Configuration for the solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Value an expression must evaluate to, compared exactly
    pub target: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
        }
    }
}
