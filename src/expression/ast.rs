use crate::expression::operator::Operator;

/// An arithmetic expression over numeric literals
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(operator, Box::new(left), Box::new(right))
    }

    /// The literal operands, left to right
    pub fn operands(&self) -> Vec<f64> {
        fn collect(expr: &Expression, out: &mut Vec<f64>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Binary(_, l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
