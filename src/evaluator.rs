//! Numeric evaluation of expression trees.

use rustc_hash::FxHashMap;

use crate::ast::{Node, Rational};
use crate::error::MathError;
use crate::functions::Registry;
use crate::visitor::Visitor;

/// Variable bindings for evaluation, keyed by variable name.
pub type Environment = FxHashMap<String, f64>;

/// Visitor computing the numeric value of a tree under an environment.
///
/// Floating point follows native semantics: `0^0 = 1`, negative bases with
/// fractional exponents yield NaN. Only an exactly-zero divisor is an
/// error.
pub struct Evaluator<'a> {
    variables: &'a Environment,
}

impl<'a> Evaluator<'a> {
    pub fn new(variables: &'a Environment) -> Self {
        Evaluator { variables }
    }
}

impl Visitor for Evaluator<'_> {
    type Output = Result<f64, MathError>;

    fn visit_number(&mut self, value: f64) -> Self::Output {
        Ok(value)
    }

    fn visit_integer(&mut self, value: i64) -> Self::Output {
        Ok(value as f64)
    }

    fn visit_rational(&mut self, value: &Rational) -> Self::Output {
        Ok(value.value())
    }

    fn visit_variable(&mut self, name: &str) -> Self::Output {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| MathError::unknown_variable(name))
    }

    fn visit_constant(&mut self, name: &str) -> Self::Output {
        match name {
            "pi" => Ok(std::f64::consts::PI),
            "e" => Ok(std::f64::consts::E),
            _ => Err(MathError::unknown_constant(name)),
        }
    }

    fn visit_function(&mut self, name: &str, operand: &Node) -> Self::Output {
        let inner = operand.accept(self)?;
        let definition =
            Registry::get(name).ok_or_else(|| MathError::unknown_function(name))?;
        Ok((definition.eval)(inner))
    }

    fn visit_expression(&mut self, left: &Node, op: char, right: Option<&Node>) -> Self::Output {
        let left_value = left.accept(self)?;
        let right_value = match right {
            Some(right) => Some(right.accept(self)?),
            None => None,
        };

        match (op, right_value) {
            ('-', None) => Ok(-left_value),
            ('+', Some(right_value)) => Ok(left_value + right_value),
            ('-', Some(right_value)) => Ok(left_value - right_value),
            ('*', Some(right_value)) => Ok(left_value * right_value),
            ('/', Some(right_value)) => {
                if right_value == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                Ok(left_value / right_value)
            }
            ('^', Some(right_value)) => Ok(left_value.powf(right_value)),
            // Unreachable for parser-built trees; hand-assembled nodes can
            // still carry anything.
            _ => Err(MathError::UnknownOperator { symbol: op }),
        }
    }
}

/// Evaluate a tree under the given variable bindings.
///
/// # Example
/// ```
/// use mathexpr::{evaluate, parse, Environment};
///
/// let tree = parse("2x^2").unwrap();
/// let mut env = Environment::default();
/// env.insert("x".to_string(), 3.0);
/// assert_eq!(evaluate(&tree, &env).unwrap(), 18.0);
/// ```
///
/// # Errors
/// `UnknownVariable`, `UnknownConstant`, `UnknownFunction`,
/// `DivisionByZero`, or (for hand-assembled trees) `UnknownOperator`.
pub fn evaluate(node: &Node, variables: &Environment) -> Result<f64, MathError> {
    node.accept(&mut Evaluator::new(variables))
}
