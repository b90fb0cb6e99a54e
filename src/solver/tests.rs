use std::collections::HashSet;

use rayon::prelude::*;

use crate::expression::{Expression, Operator, Topology};
use crate::solver::constants::HIGHEST_CARRIAGE_NUMBER;
use crate::solver::{MakeTenSolver, Solution, SolverConfig, SolverError, rank, score, select_best};
use crate::utils::{UtilsError, parse_carriage_number};
use crate::{Outcome, find_solution, solve};

use Operator::{Divide, Exponent, Minus, Plus, Times};

#[test]
fn test_solve_1234() {
    assert_eq!(solve("1234"), Outcome::Found("1 + 2 + 3 + 4".to_string()));
}

#[test]
fn test_solve_prefers_original_digit_order() {
    assert_eq!(solve("4321"), Outcome::Found("4 + 3 + 2 + 1".to_string()));
    assert_eq!(solve("0019"), Outcome::Found("0 + 0 + 1 + 9".to_string()));
}

#[test]
fn test_solve_known_answers() {
    assert_eq!(solve("5555"), Outcome::Found("5 + 5 + 5 - 5".to_string()));
    assert_eq!(solve("2222"), Outcome::Found("2 + 2 × 2 × 2".to_string()));
    assert_eq!(solve("9999"), Outcome::Found("(9 + 9 × 9) ÷ 9".to_string()));
    assert_eq!(solve("8888"), Outcome::Found("8 + (8 + 8) ÷ 8".to_string()));
    assert_eq!(solve("3333"), Outcome::Found("3 × 3 + 3 ÷ 3".to_string()));
}

#[test]
fn test_solve_power_under_product_needs_no_parens() {
    // `(1 ^ 3) × 9` prints bare, so it ties `1 × 1 ^ 3 + 9` and wins on search order
    assert_eq!(solve("1139"), Outcome::Found("1 + 1 ^ 3 × 9".to_string()));
}

#[test]
fn test_solve_not_found() {
    assert_eq!(solve("0000"), Outcome::NotFound);
    assert_eq!(solve("1111"), Outcome::NotFound);
    assert_eq!(solve("1000"), Outcome::NotFound);
    assert_eq!(solve("7777"), Outcome::NotFound);
}

#[test]
fn test_solve_invalid_input() {
    assert_eq!(solve(""), Outcome::InvalidInput(UtilsError::EmptyInput));
    assert_eq!(
        solve("12"),
        Outcome::InvalidInput(UtilsError::InvalidLength { length: 2 })
    );
    assert!(matches!(solve("12.5"), Outcome::InvalidInput(_)));
    assert!(matches!(solve("abcd"), Outcome::InvalidInput(_)));
}

#[test]
fn test_solve_is_deterministic() {
    for input in ["1234", "9999", "2580", "6174"] {
        assert_eq!(solve(input), solve(input));
    }
}

#[test]
fn test_found_text_evaluates_to_ten() {
    (0..=HIGHEST_CARRIAGE_NUMBER).into_par_iter().for_each(|number| {
        let input = format!("{:04}", number);
        if let Outcome::Found(text) = solve(&input) {
            let parsed = Expression::parse(&text);
            assert!(parsed.is_ok(), "failed to parse {}", text);
            if let Ok(expr) = parsed {
                assert_eq!(expr.evaluate(), 10.0, "{} for {}", text, input);
            }
        }
    });
}

#[test]
fn test_find_solution_returns_structured_winner() {
    let result = find_solution("1234");
    assert!(result.is_ok());
    if let Ok(Some(solution)) = result {
        assert_eq!(solution.digits, [1, 2, 3, 4]);
        assert_eq!(solution.operators, [Plus, Plus, Plus]);
        assert_eq!(solution.topology, Topology::RightChain);
        assert_eq!(solution.paren_count, 0);
    } else {
        panic!("expected a solution for 1234");
    }

    assert_eq!(
        find_solution("12"),
        Err(SolverError::UtilsError(UtilsError::InvalidLength {
            length: 2
        }))
    );
    assert_eq!(find_solution("0000"), Ok(None));
}

#[test]
fn test_find_solutions_all_reach_target() {
    let solver = MakeTenSolver::default();
    let solutions = solver.find_solutions(&[1, 2, 3, 4]);
    assert_eq!(solutions.len(), 284);
    for solution in &solutions {
        let value = solution.topology.evaluate(&solution.digits, &solution.operators);
        assert_eq!(value, 10.0);
        assert_eq!(solution.paren_count, solution.topology.paren_count(&solution.operators));
    }
}

#[test]
fn test_find_solutions_deduplicates_orderings() {
    let solver = MakeTenSolver::default();
    let solutions = solver.find_solutions(&[5, 5, 5, 5]);
    let distinct: HashSet<_> = solutions.iter().collect();
    assert_eq!(distinct.len(), solutions.len());
    assert!(solutions.iter().all(|s| s.digits == [5, 5, 5, 5]));
}

#[test]
fn test_find_solutions_follow_search_order() {
    let solver = MakeTenSolver::default();
    let solutions = solver.find_solutions(&[1, 2, 3, 4]);
    let first_five: Vec<_> = solutions.iter().take(5).map(|s| s.topology).collect();
    assert_eq!(first_five, Topology::ALL);
}

#[test]
fn test_custom_target() {
    let solver = MakeTenSolver::new(SolverConfig { target: 24.0 });
    assert_eq!(solver.config().target, 24.0);
    let best = solver.find_best(&[1, 2, 3, 4]);
    assert!(best.is_some());
    if let Some(solution) = best {
        let value = solution.topology.evaluate(&solution.digits, &solution.operators);
        assert_eq!(value, 24.0);
    }
}

#[test]
fn test_score_weights() {
    let plain = Solution::new([1, 2, 3, 4], [Plus, Plus, Plus], Topology::RightChain);
    assert_eq!(score(&plain), 6);

    let mixed = Solution::new([1, 2, 3, 4], [Times, Minus, Divide], Topology::LeftChain);
    assert_eq!(mixed.paren_count, 1);
    assert_eq!(score(&mixed), 1 - 1 - 2 - 3);

    let powers = Solution::new(
        [2, 3, 1, 1],
        [Exponent, Exponent, Exponent],
        Topology::RightInner,
    );
    assert_eq!(powers.paren_count, 2);
    assert_eq!(score(&powers), -12 - 6);
}

#[test]
fn test_rank_is_stable_for_ties() {
    let a = Solution::new([1, 2, 3, 4], [Plus, Plus, Plus], Topology::RightChain);
    let b = Solution::new([4, 3, 2, 1], [Plus, Plus, Plus], Topology::LeftChain);
    let c = Solution::new([1, 2, 3, 4], [Minus, Plus, Plus], Topology::LeftChain);
    let mut solutions = vec![c, a, b];
    rank(&mut solutions);
    assert_eq!(solutions, vec![a, b, c]);
}

#[test]
fn test_select_best_prefers_original_order_over_score() {
    let reordered = Solution::new([4, 3, 2, 1], [Plus, Plus, Plus], Topology::RightChain);
    let same_order = Solution::new([1, 2, 3, 4], [Minus, Times, Divide], Topology::LeftChain);
    let ranked = vec![reordered, same_order];

    assert_eq!(select_best(&ranked, &[1, 2, 3, 4]), Some(&same_order));
    assert_eq!(select_best(&ranked, &[2, 1, 3, 4]), Some(&reordered));
    assert_eq!(select_best(&[], &[1, 2, 3, 4]), None);
}

#[test]
fn test_count_operators() {
    let solution = Solution::new([1, 2, 3, 4], [Plus, Times, Plus], Topology::Balanced);
    assert_eq!(solution.count(Plus), 2);
    assert_eq!(solution.count(Times), 1);
    assert_eq!(solution.count(Exponent), 0);
    assert_eq!(score(&solution), 2 * 2 + 1 - 3 * solution.paren_count as i32);
}

#[test]
fn test_check_valid_expression() {
    let solver = MakeTenSolver::default();
    let digits = [9, 9, 9, 9];
    let report = solver.check(&digits, "(9 + 9 * 9) / 9");
    assert!(report.is_ok());
    if let Ok(report) = report {
        assert!(report.reaches_target);
        assert!(report.uses_digits);
        assert!(report.is_valid());
    }
}

#[test]
fn test_check_wrong_digits_or_value() {
    let solver = MakeTenSolver::default();
    let digits = [1, 2, 3, 4];

    let report = solver.check(&digits, "5 + 5");
    assert!(matches!(report, Ok(ref r) if r.reaches_target && !r.uses_digits));

    let report = solver.check(&digits, "12 - 3 + 4");
    assert!(matches!(report, Ok(ref r) if !r.uses_digits));

    let report = solver.check(&digits, "1 × 2 × 3 × 4");
    assert!(matches!(report, Ok(ref r) if r.uses_digits && !r.reaches_target && !r.is_valid()));
}

#[test]
fn test_check_parse_error() {
    let solver = MakeTenSolver::default();
    let result = solver.check(&[1, 2, 3, 4], "1 + + 2");
    assert!(matches!(result, Err(SolverError::ExpressionError(_))));
}

#[test]
fn test_unsolved_range() {
    let solver = MakeTenSolver::default();
    let unsolved = solver.unsolved(1230..=1240);
    assert!(unsolved.is_ok());
    if let Ok(unsolved) = unsolved {
        assert!(!unsolved.contains(&[1, 2, 3, 4]));
        for digits in &unsolved {
            assert!(solver.find_solutions(digits).is_empty());
        }
        let mut sorted = unsolved.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, unsolved);
    }

    let all_zero = solver.unsolved(0..=0);
    assert_eq!(all_zero, Ok(vec![[0, 0, 0, 0]]));
}

#[test]
fn test_unsolved_rejects_wide_numbers() {
    let solver = MakeTenSolver::default();
    assert_eq!(
        solver.unsolved(9999..=10000),
        Err(SolverError::UtilsError(UtilsError::NumberOutOfRange(10000)))
    );
}

#[test]
fn test_parsed_carriage_number_feeds_solver() {
    let digits = parse_carriage_number(" 2580 ");
    assert_eq!(digits, Ok([2, 5, 8, 0]));
}

#[test]
fn test_outcome_messages() {
    assert_eq!(solve("1234").to_string(), "1 + 2 + 3 + 4");
    assert_eq!(Outcome::NotFound.to_string(), "No solution found.");
    assert_eq!(
        Outcome::InvalidInput(UtilsError::EmptyInput).to_string(),
        "Please enter a four digit number"
    );
}
