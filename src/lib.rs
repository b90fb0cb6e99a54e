//! Make Ten - A solver for the Sydney train carriage game
//!
//! Given a four-digit carriage number, this library searches every ordering of the
//! digits, every triple of `+ - × ÷ ^` and every way to parenthesize four operands
//! for an expression equal to 10, then picks the most elegant one.

pub mod expression;
pub mod solver;
pub mod utils;

use std::fmt;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, Topology};
pub use solver::{CheckReport, MakeTenSolver, Solution, SolverConfig, SolverError};
pub use utils::{Digits, UtilsError, parse_carriage_number};

/// Result of solving one carriage number
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The rendered best expression
    Found(String),
    /// No combination of digits, operators and shapes reaches the target
    NotFound,
    /// The input was not a four-digit number
    InvalidInput(UtilsError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Found(text) => write!(f, "{}", text),
            Outcome::NotFound => write!(f, "No solution found."),
            Outcome::InvalidInput(_) => write!(f, "Please enter a four digit number"),
        }
    }
}

/// Find the most elegant solution for a carriage number
///
/// # Arguments
///
/// * `input` - Four ASCII digits, optionally surrounded by whitespace
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If the digits can make 10
/// * `Ok(None)` - If no combination reaches 10
/// * `Err(SolverError)` - If the input is not a four-digit number
///
/// # Errors
///
/// This function will return an error if the trimmed input is empty, is not four
/// characters long, or contains anything other than digits.
///
/// # Examples
///
/// ```
/// use make_ten::find_solution;
///
/// match find_solution("1234") {
///     Ok(Some(solution)) => println!("Found: {}", solution),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(input: &str) -> Result<Option<Solution>, SolverError> {
    let digits = parse_carriage_number(input)?;

    let solver = MakeTenSolver::default();
    Ok(solver.find_best(&digits))
}

/// Solve a carriage number and render the answer as text
///
/// # Examples
///
/// ```
/// use make_ten::{Outcome, solve};
///
/// assert_eq!(solve("1234"), Outcome::Found("1 + 2 + 3 + 4".to_string()));
/// assert_eq!(solve("0000"), Outcome::NotFound);
/// assert!(matches!(solve("12.5"), Outcome::InvalidInput(_)));
/// ```
pub fn solve(input: &str) -> Outcome {
    let digits = match parse_carriage_number(input) {
        Ok(digits) => digits,
        Err(err) => return Outcome::InvalidInput(err),
    };

    match MakeTenSolver::default().find_best(&digits) {
        Some(solution) => Outcome::Found(solution.to_string()),
        None => Outcome::NotFound,
    }
}
