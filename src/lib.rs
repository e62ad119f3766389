//! Mathematical expression parsing, evaluation and symbolic differentiation.
//!
//! The pipeline is token stream → AST → transformed AST or value:
//! a tokenizer turns text into typed tokens, a shunting-yard parser builds
//! one tree per expression, and visitors walk trees to evaluate them
//! numerically or differentiate them symbolically. Derivatives are
//! ordinary trees, so they can be evaluated, printed or differentiated
//! again.
//!
//! # Usage
//!
//! ```
//! use mathexpr::{differentiate, evaluate, parse, Environment};
//!
//! let f = parse("x*sin(x)").unwrap();
//!
//! let df = differentiate(&f, "x").unwrap();
//! assert_eq!(df, parse("x*cos(x)+sin(x)").unwrap());
//!
//! let mut env = Environment::default();
//! env.insert("x".to_string(), 1.0);
//! let value = evaluate(&df, &env).unwrap();
//! assert!((value - (1.0_f64.cos() + 1.0_f64.sin())).abs() < 1e-12);
//! ```
//!
//! Expressions use natural notation: implicit multiplication (`2x`,
//! `2(x+1)`), `^` for powers (right-associative), the constants `pi` and
//! `e`, and the usual elementary functions with their common synonyms
//! (`ln` for `log`, `asin` for `arcsin`, ...).

mod ast;
mod differentiator;
mod display;
mod error;
mod evaluator;
pub(crate) mod functions;
pub mod helpers;
pub mod parser;
mod traits;
pub mod visitor;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

pub use ast::{constructors, Node, Rational};
pub use differentiator::{differentiate, Differentiator};
pub use error::MathError;
pub use evaluator::{evaluate, Environment, Evaluator};
pub use parser::{parse, tokenize, Lexer, Parser, Token, TokenDefinition, TokenKind};
pub use visitor::Visitor;
