use std::fmt;

/// A binary arithmetic operator from the fixed Make Ten catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    Exponent,
}

/// The three operators placed between four digits, left to right
pub type Operators = [Operator; 3];

impl Operator {
    /// Every operator, in search order
    pub const ALL: [Operator; 5] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
        Operator::Exponent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Plus => "plus",
            Operator::Minus => "minus",
            Operator::Times => "times",
            Operator::Divide => "divide",
            Operator::Exponent => "exponent",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '×',
            Operator::Divide => '÷',
            Operator::Exponent => '^',
        }
    }

    /// Recognize an operator symbol, including common ASCII spellings
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Plus),
            '-' | '−' => Some(Operator::Minus),
            '×' | '*' | 'x' | 'X' => Some(Operator::Times),
            '÷' | '/' => Some(Operator::Divide),
            '^' => Some(Operator::Exponent),
            _ => None,
        }
    }

    /// Apply the operator with IEEE semantics.
    ///
    /// Division by zero and fractional powers of negative numbers produce
    /// infinities or NaN instead of errors.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Plus => left + right,
            Operator::Minus => left - right,
            Operator::Times => left * right,
            Operator::Divide => left / right,
            Operator::Exponent => left.powf(right),
        }
    }

    /// Binding strength: exponent > times/divide > plus/minus
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Times | Operator::Divide => 2,
            Operator::Exponent => 3,
        }
    }

    /// Whether `a op (b op' c)` reads the same as `a op b op' c` when `op'` has the same precedence
    pub fn is_associative(self) -> bool {
        matches!(self, Operator::Plus | Operator::Times)
    }

    /// Whether a sub-expression built with `self` needs parentheses as the left operand of `parent`
    pub fn needs_parens_left_of(self, parent: Operator) -> bool {
        self.precedence() < parent.precedence() || parent == Operator::Exponent
    }

    /// Whether a sub-expression built with `self` needs parentheses as the right operand of
    /// `parent`
    pub fn needs_parens_right_of(self, parent: Operator) -> bool {
        self.precedence() < parent.precedence()
            || (self.precedence() == parent.precedence() && !parent.is_associative())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
