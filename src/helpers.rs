//! Convenience wrappers over the parse/evaluate/differentiate pipeline.

use crate::ast::Node;
use crate::differentiator::differentiate;
use crate::error::MathError;
use crate::evaluator::{Environment, evaluate};
use crate::parser::parse;

/// Parse and evaluate in one step.
///
/// # Example
/// ```
/// use mathexpr::{Environment, helpers::evaluate_str};
///
/// let mut env = Environment::default();
/// env.insert("x".to_string(), 2.0);
/// assert_eq!(evaluate_str("x^3+1", &env).unwrap(), 9.0);
/// ```
pub fn evaluate_str(input: &str, variables: &Environment) -> Result<f64, MathError> {
    evaluate(&parse(input)?, variables)
}

/// The n-th derivative of a tree with respect to `variable`.
///
/// Derivative trees are themselves valid trees, so higher orders are just
/// repeated passes; `order = 0` returns a clone of the input.
pub fn nth_derivative(node: &Node, variable: &str, order: u32) -> Result<Node, MathError> {
    let mut current = node.clone();
    for _ in 0..order {
        current = differentiate(&current, variable)?;
    }
    Ok(current)
}
