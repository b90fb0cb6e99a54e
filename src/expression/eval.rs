use log::debug;

use crate::expression::ast::Expression;

impl Expression {
    /// Evaluate with the same IEEE semantics the solver uses.
    ///
    /// Never fails: division by zero gives an infinity or NaN.
    pub fn evaluate(&self) -> f64 {
        fn eval(expr: &Expression) -> f64 {
            match expr {
                Expression::Number(n) => *n,
                Expression::Binary(op, l, r) => op.apply(eval(l), eval(r)),
            }
        }

        let value = eval(self);
        debug!("Expression {} evaluated to {}", self, value);
        value
    }
}
