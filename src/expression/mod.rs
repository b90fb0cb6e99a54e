//! Operators, the five expression shapes, and a small expression AST

mod ast;
mod display;
mod errors;
mod eval;
mod operator;
mod parse;
mod topology;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::{Operator, Operators};
pub use topology::Topology;
