use std::ops::RangeInclusive;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Expression, Operator, Topology};
use crate::solver::check::{CheckReport, uses_exactly};
use crate::solver::config::SolverConfig;
use crate::solver::constants::EPSILON;
use crate::solver::errors::SolverError;
use crate::solver::ranking::{rank, select_best};
use crate::solver::solution::Solution;
use crate::utils::{Digits, split_into_digits, unique_permutations};

/// Brute-force solver for the Make Ten puzzle
#[derive(Debug, Clone, Default)]
pub struct MakeTenSolver {
    config: SolverConfig,
}

impl MakeTenSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every digit ordering, operator triple and shape that evaluates exactly to the target.
    ///
    /// Solutions come out in search order: orderings first, then `o0`, `o1`, `o2`
    /// over the operator catalog, then shapes.
    pub fn find_solutions(&self, digits: &Digits) -> Vec<Solution> {
        let orderings = unique_permutations(digits);
        debug!(
            "Searching {} orderings x {} operator triples x {} shapes",
            orderings.len(),
            Operator::ALL.len().pow(3),
            Topology::ALL.len()
        );

        let mut solutions = Vec::new();
        for ordering in &orderings {
            for o0 in Operator::ALL {
                for o1 in Operator::ALL {
                    for o2 in Operator::ALL {
                        let operators = [o0, o1, o2];
                        for topology in Topology::ALL {
                            if topology.evaluate(ordering, &operators) == self.config.target {
                                solutions.push(Solution::new(*ordering, operators, topology));
                            }
                        }
                    }
                }
            }
        }

        debug!("Found {} solutions for {:?}", solutions.len(), digits);
        solutions
    }

    /// All solutions, most elegant first
    pub fn ranked_solutions(&self, digits: &Digits) -> Vec<Solution> {
        let mut solutions = self.find_solutions(digits);
        rank(&mut solutions);
        solutions
    }

    /// The single solution worth showing, if any exists
    pub fn find_best(&self, digits: &Digits) -> Option<Solution> {
        let ranked = self.ranked_solutions(digits);
        let best = select_best(&ranked, digits).copied();

        match &best {
            Some(solution) => info!("Best solution for {:?}: {}", digits, solution),
            None => info!("No solution for {:?}", digits),
        }
        best
    }

    /// Verify a proposed expression against a carriage number
    ///
    /// # Errors
    ///
    /// Returns an error if the expression text cannot be parsed.
    pub fn check(&self, digits: &Digits, text: &str) -> Result<CheckReport, SolverError> {
        let expression = Expression::parse(text)?;
        let value = expression.evaluate();
        let reaches_target = (value - self.config.target).abs() < EPSILON;
        let uses_digits = uses_exactly(&expression, digits);

        info!(
            "Checked '{}' = {} (target reached: {}, digits used: {})",
            expression, value, reaches_target, uses_digits
        );

        Ok(CheckReport {
            expression,
            value,
            reaches_target,
            uses_digits,
        })
    }

    /// Carriage numbers in `numbers` with no solution, in ascending order.
    ///
    /// Numbers are solved independently and in parallel.
    ///
    /// # Errors
    ///
    /// Returns an error if the range contains a number wider than four digits.
    pub fn unsolved(&self, numbers: RangeInclusive<u32>) -> Result<Vec<Digits>, SolverError> {
        let carriages = numbers
            .map(split_into_digits)
            .collect::<Result<Vec<_>, _>>()?;
        info!("Surveying {} carriage numbers", carriages.len());

        let unsolved: Vec<Digits> = carriages
            .into_par_iter()
            .filter(|digits| self.find_solutions(digits).is_empty())
            .collect();

        info!("{} carriage numbers have no solution", unsolved.len());
        Ok(unsolved)
    }
}
