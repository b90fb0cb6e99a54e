use std::cmp::Reverse;

use crate::expression::Operator;
use crate::solver::solution::Solution;
use crate::utils::Digits;

const PAREN_PENALTY: i32 = 3;

/// Elegance score: additions and products are rewarded, everything else and
/// every pair of parentheses costs points.
pub fn score(solution: &Solution) -> i32 {
    let count = |operator| solution.count(operator) as i32;
    2 * count(Operator::Plus) + count(Operator::Times)
        - count(Operator::Minus)
        - 2 * count(Operator::Divide)
        - 4 * count(Operator::Exponent)
        - PAREN_PENALTY * solution.paren_count as i32
}

/// Sort solutions from most to least elegant, keeping search order among ties
pub fn rank(solutions: &mut [Solution]) {
    solutions.sort_by_key(|solution| Reverse(score(solution)));
}

/// Pick the solution to show from a ranked list.
///
/// A solution that keeps the digits in their original order wins even over a
/// higher-scoring reordering; otherwise the top-ranked solution is used.
pub fn select_best<'a>(ranked: &'a [Solution], original: &Digits) -> Option<&'a Solution> {
    ranked
        .iter()
        .find(|solution| solution.digits == *original)
        .or_else(|| ranked.first())
}
