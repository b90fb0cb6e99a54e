use std::fmt;

use crate::expression::{Operator, Operators, Topology};
use crate::utils::Digits;

/// A digit ordering, operator triple and shape whose value hits the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    pub digits: Digits,
    pub operators: Operators,
    pub topology: Topology,
    pub paren_count: usize,
}

impl Solution {
    pub fn new(digits: Digits, operators: Operators, topology: Topology) -> Self {
        Self {
            digits,
            operators,
            topology,
            paren_count: topology.paren_count(&operators),
        }
    }

    /// How many times `operator` appears in this solution
    pub fn count(&self, operator: Operator) -> usize {
        self.operators.iter().filter(|&&op| op == operator).count()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.topology.render(&self.digits, &self.operators))
    }
}
