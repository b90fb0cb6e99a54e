mod check;
mod config;
pub mod constants;
mod core;
mod errors;
mod ranking;
mod solution;

pub use check::CheckReport;
pub use config::SolverConfig;
pub use self::core::MakeTenSolver;
pub use errors::SolverError;
pub use ranking::{rank, score, select_best};
pub use solution::Solution;

#[cfg(test)]
mod tests;
