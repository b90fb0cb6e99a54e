use crate::expression::Expression;
use crate::utils::Digits;

/// Verdict on a user-supplied expression for a carriage number
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub expression: Expression,
    pub value: f64,
    pub reaches_target: bool,
    pub uses_digits: bool,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.reaches_target && self.uses_digits
    }
}

/// Whether the expression's operands are exactly the given digits, in any order
pub(crate) fn uses_exactly(expression: &Expression, digits: &Digits) -> bool {
    let operands: Option<Vec<u8>> = expression
        .operands()
        .into_iter()
        .map(|n| {
            if n.fract() == 0.0 && (0.0..=9.0).contains(&n) {
                Some(n as u8)
            } else {
                None
            }
        })
        .collect();

    match operands {
        Some(mut used) => {
            let mut expected = digits.to_vec();
            used.sort_unstable();
            expected.sort_unstable();
            used == expected
        }
        None => false,
    }
}
