use std::fmt;

use log::{debug, warn};

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

// Four digits never need more than a handful of levels or tokens
const MAX_NESTING_DEPTH: usize = 16;
const MAX_TOKENS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Split input into tokens paired with their byte offsets
fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '0'..='9' => {
                let mut literal = String::from(c);
                while let Some((_, next)) = chars.next_if(|&(_, next)| next.is_ascii_digit()) {
                    literal.push(next);
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::UnexpectedToken {
                        token: literal.clone(),
                        offset,
                    })?;
                Token::Number(value)
            }
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            other => match Operator::from_symbol(other) {
                Some(op) => Token::Op(op),
                None => {
                    warn!("Unexpected character '{}' at offset {}", other, offset);
                    return Err(ExpressionError::UnexpectedCharacter {
                        character: other,
                        offset,
                    });
                }
            },
        };
        tokens.push((offset, token));
        if tokens.len() > MAX_TOKENS {
            warn!("Expression has more than {} tokens", MAX_TOKENS);
            return Err(ExpressionError::TooLong { limit: MAX_TOKENS });
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser, one method per precedence level
struct Parser {
    tokens: Vec<(usize, Token)>,
    index: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<(usize, Token)>) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ExpressionError>,
    ) -> Result<T, ExpressionError> {
        if self.depth >= MAX_NESTING_DEPTH {
            warn!("Expression nested deeper than {} levels", MAX_NESTING_DEPTH);
            return Err(ExpressionError::TooDeeplyNested {
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn peek_operator(&self) -> Option<Operator> {
        match self.tokens.get(self.index) {
            Some((_, Token::Op(op))) => Some(*op),
            _ => None,
        }
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.index).copied();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn parse_sum(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_product()?;
        while let Some(op @ (Operator::Plus | Operator::Minus)) = self.peek_operator() {
            self.index += 1;
            let right = self.parse_product()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_product(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_power()?;
        while let Some(op @ (Operator::Times | Operator::Divide)) = self.peek_operator() {
            self.index += 1;
            let right = self.parse_power()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    // `^` is right associative: 2 ^ 3 ^ 2 = 2 ^ (3 ^ 2)
    fn parse_power(&mut self) -> Result<Expression, ExpressionError> {
        let base = self.parse_atom()?;
        if self.peek_operator() == Some(Operator::Exponent) {
            self.index += 1;
            let exponent = self.nested(Self::parse_power)?;
            return Ok(Expression::binary(Operator::Exponent, base, exponent));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expression, ExpressionError> {
        match self.advance() {
            Some((_, Token::Number(n))) => Ok(Expression::Number(n)),
            Some((_, Token::LeftParen)) => {
                let inner = self.nested(Self::parse_sum)?;
                match self.advance() {
                    Some((_, Token::RightParen)) => Ok(inner),
                    Some((offset, token)) => Err(ExpressionError::UnexpectedToken {
                        token: token.to_string(),
                        offset,
                    }),
                    None => Err(ExpressionError::UnbalancedParentheses),
                }
            }
            Some((offset, token)) => Err(ExpressionError::UnexpectedToken {
                token: token.to_string(),
                offset,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

impl Expression {
    /// Parse infix text such as `"(9 + 9 × 9) ÷ 9"`.
    ///
    /// Accepts non-negative integer literals, parentheses and the operator symbols
    /// `+`, `-`, `×`/`*`/`x`, `÷`/`/` and `^`. Unary minus is not supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty, contains an unknown character,
    /// is cut off, has unbalanced parentheses, or is too long or too deeply nested.
    pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
        debug!("Parsing expression: '{}'", input);

        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ExpressionError::EmptyExpression);
        }

        let mut parser = Parser::new(tokens);
        let expr = parser.parse_sum()?;

        match parser.advance() {
            None => {
                debug!("Parsed expression: {}", expr);
                Ok(expr)
            }
            Some((_, Token::RightParen)) => Err(ExpressionError::UnbalancedParentheses),
            Some((offset, token)) => Err(ExpressionError::UnexpectedToken {
                token: token.to_string(),
                offset,
            }),
        }
    }
}
