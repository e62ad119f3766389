//! Parallel batch evaluation using Rayon.
//!
//! Trees are immutable once built, so concurrent evaluation passes over a
//! shared tree are safe as long as each call carries its own environment.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! mathexpr = { version = "0.1", features = ["parallel"] }
//! ```

use rayon::prelude::*;

use crate::ast::Node;
use crate::error::MathError;
use crate::evaluator::{Environment, evaluate};

/// Evaluate one tree under many environments in parallel.
///
/// Results are returned in input order; each point fails or succeeds
/// independently.
///
/// # Example
/// ```ignore
/// use mathexpr::{parse, Environment, parallel::evaluate_batch};
///
/// let tree = parse("x^2").unwrap();
/// let points: Vec<Environment> = (0..100)
///     .map(|i| {
///         let mut env = Environment::default();
///         env.insert("x".to_string(), i as f64);
///         env
///     })
///     .collect();
/// let values = evaluate_batch(&tree, &points);
/// assert_eq!(values[3], Ok(9.0));
/// ```
pub fn evaluate_batch(node: &Node, environments: &[Environment]) -> Vec<Result<f64, MathError>> {
    environments
        .par_iter()
        .map(|env| evaluate(node, env))
        .collect()
}
