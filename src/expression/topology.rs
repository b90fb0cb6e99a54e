use crate::expression::ast::Expression;
use crate::expression::operator::Operators;
use crate::utils::Digits;

/// One of the five ways to fully parenthesize `a ∘ b ∘ c ∘ d`
///
/// Operators are numbered left to right as `o0`, `o1`, `o2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// `a o0 (b o1 (c o2 d))`
    RightChain,
    /// `((a o0 b) o1 c) o2 d`
    LeftChain,
    /// `(a o0 b) o1 (c o2 d)`
    Balanced,
    /// `(a o0 (b o1 c)) o2 d`
    LeftInner,
    /// `a o0 ((b o1 c) o2 d)`
    RightInner,
}

impl Topology {
    /// Every shape, in search order
    pub const ALL: [Topology; 5] = [
        Topology::RightChain,
        Topology::LeftChain,
        Topology::Balanced,
        Topology::LeftInner,
        Topology::RightInner,
    ];

    /// Evaluate the shape exactly as nested, ignoring conventional precedence
    pub fn evaluate(self, digits: &Digits, operators: &Operators) -> f64 {
        let [a, b, c, d] = digits.map(f64::from);
        let [o0, o1, o2] = *operators;

        match self {
            Topology::RightChain => o0.apply(a, o1.apply(b, o2.apply(c, d))),
            Topology::LeftChain => o2.apply(o1.apply(o0.apply(a, b), c), d),
            Topology::Balanced => o1.apply(o0.apply(a, b), o2.apply(c, d)),
            Topology::LeftInner => o2.apply(o0.apply(a, o1.apply(b, c)), d),
            Topology::RightInner => o0.apply(a, o2.apply(o1.apply(b, c), d)),
        }
    }

    /// Which of the shape's two inner sub-expressions must be parenthesized.
    ///
    /// The first flag is for the sub-expression built first when evaluating, the
    /// second for the one that contains or follows it.
    pub fn paren_flags(self, operators: &Operators) -> [bool; 2] {
        let [o0, o1, o2] = *operators;

        match self {
            Topology::RightChain => [o2.needs_parens_right_of(o1), o1.needs_parens_right_of(o0)],
            Topology::LeftChain => [o0.needs_parens_left_of(o1), o1.needs_parens_left_of(o2)],
            Topology::Balanced => [o0.needs_parens_left_of(o1), o2.needs_parens_right_of(o1)],
            Topology::LeftInner => [o1.needs_parens_right_of(o0), o0.needs_parens_left_of(o2)],
            Topology::RightInner => [o1.needs_parens_left_of(o2), o2.needs_parens_right_of(o0)],
        }
    }

    /// Number of parenthesized groups `render` emits for these operators
    pub fn paren_count(self, operators: &Operators) -> usize {
        self.paren_flags(operators)
            .iter()
            .filter(|&&wrap| wrap)
            .count()
    }

    /// Render as infix text with only the parentheses needed to keep the meaning
    pub fn render(self, digits: &Digits, operators: &Operators) -> String {
        self.to_expression(digits, operators).to_string()
    }

    /// Build the expression tree this shape describes
    pub fn to_expression(self, digits: &Digits, operators: &Operators) -> Expression {
        let [a, b, c, d] = digits.map(|digit| Expression::Number(f64::from(digit)));
        let [o0, o1, o2] = *operators;

        match self {
            Topology::RightChain => {
                let inner = Expression::binary(o1, b, Expression::binary(o2, c, d));
                Expression::binary(o0, a, inner)
            }
            Topology::LeftChain => {
                let inner = Expression::binary(o1, Expression::binary(o0, a, b), c);
                Expression::binary(o2, inner, d)
            }
            Topology::Balanced => Expression::binary(
                o1,
                Expression::binary(o0, a, b),
                Expression::binary(o2, c, d),
            ),
            Topology::LeftInner => {
                let inner = Expression::binary(o0, a, Expression::binary(o1, b, c));
                Expression::binary(o2, inner, d)
            }
            Topology::RightInner => {
                let inner = Expression::binary(o2, Expression::binary(o1, b, c), d);
                Expression::binary(o0, a, inner)
            }
        }
    }
}
