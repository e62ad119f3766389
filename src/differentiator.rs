//! Symbolic differentiation of expression trees.
//!
//! A visitor transforming a tree into a new tree representing its
//! derivative. Every subtree is built through the simplifying constructors
//! in [`crate::ast::constructors`], so the result stays compact across
//! repeated differentiation passes; the output is itself a valid tree that
//! can be evaluated or differentiated again.

use crate::ast::constructors as build;
use crate::ast::{Node, Rational};
use crate::error::MathError;
use crate::functions::Registry;
use crate::visitor::Visitor;

/// The `d/dv` operator for a fixed variable `v`.
pub struct Differentiator {
    variable: String,
}

impl Differentiator {
    pub fn new(variable: impl Into<String>) -> Self {
        Differentiator {
            variable: variable.into(),
        }
    }
}

impl Visitor for Differentiator {
    type Output = Result<Node, MathError>;

    fn visit_number(&mut self, _value: f64) -> Self::Output {
        Ok(Node::number(0.0))
    }

    fn visit_integer(&mut self, _value: i64) -> Self::Output {
        Ok(Node::number(0.0))
    }

    fn visit_rational(&mut self, _value: &Rational) -> Self::Output {
        Ok(Node::number(0.0))
    }

    fn visit_variable(&mut self, name: &str) -> Self::Output {
        if name == self.variable {
            Ok(Node::number(1.0))
        } else {
            Ok(Node::number(0.0))
        }
    }

    fn visit_constant(&mut self, _name: &str) -> Self::Output {
        Ok(Node::number(0.0))
    }

    fn visit_function(&mut self, name: &str, operand: &Node) -> Self::Output {
        let inner = operand.accept(self)?;
        let definition =
            Registry::get(name).ok_or_else(|| MathError::unknown_function(name))?;
        (definition.derivative)(operand, inner)
    }

    fn visit_expression(&mut self, left: &Node, op: char, right: Option<&Node>) -> Self::Output {
        let left_derived = left.accept(self)?;
        let right_derived = match right {
            Some(right) => Some(right.accept(self)?),
            None => None,
        };

        match (op, right, right_derived) {
            // (-f)' = -(f'), double negation cancelling in the constructor
            ('-', None, _) => Ok(build::neg(left_derived)),

            ('+', Some(_), Some(right_derived)) => {
                Ok(build::add(left_derived, right_derived))
            }

            ('-', Some(_), Some(right_derived)) => {
                Ok(build::sub(left_derived, right_derived))
            }

            // (fg)' = f*g' + f'*g
            ('*', Some(right), Some(right_derived)) => Ok(build::add(
                build::mul(left.clone(), right_derived),
                build::mul(left_derived, right.clone()),
            )),

            // (f/g)' = (f'*g - f*g') / g^2
            ('/', Some(right), Some(right_derived)) => {
                let numerator = build::sub(
                    build::mul(left_derived, right.clone()),
                    build::mul(left.clone(), right_derived),
                );
                let denominator = build::pow(right.clone(), Node::integer(2));
                build::div(numerator, denominator)
            }

            ('^', Some(exponent), Some(right_derived)) => {
                self.power_rule(left, left_derived, exponent, right_derived)
            }

            _ => Err(MathError::UnknownOperator { symbol: op }),
        }
    }
}

impl Differentiator {
    /// `(f^n)' = n * f^(n-1) * f'` for a literal exponent, otherwise the
    /// general rule `f^g * (g'*log f + (g*f')/f)`.
    fn power_rule(
        &mut self,
        base: &Node,
        base_derived: Node,
        exponent: &Node,
        exponent_derived: Node,
    ) -> Result<Node, MathError> {
        if exponent.is_numeric() {
            let reduced = decrement_literal(exponent);
            let base_pow = build::pow(base.clone(), reduced);
            return Ok(build::mul(
                exponent.clone(),
                build::mul(base_pow, base_derived),
            ));
        }

        let log_term = build::mul(
            exponent_derived,
            Node::function("log", base.clone()),
        );
        // built as (g*f')/f so that x^x folds through x*1/x -> 1
        let ratio_term = build::div(
            build::mul(exponent.clone(), base_derived),
            base.clone(),
        )?;
        let factor = build::add(log_term, ratio_term);

        let power = Node::expression(base.clone(), '^', exponent.clone())?;
        Ok(build::mul(power, factor))
    }
}

/// `n - 1` for a numeric literal, staying in the literal's representation.
fn decrement_literal(exponent: &Node) -> Node {
    match exponent {
        Node::Integer(n) => match n.checked_sub(1) {
            Some(value) => Node::integer(value),
            None => Node::number(*n as f64 - 1.0),
        },
        Node::Number(v) => Node::number(v - 1.0),
        Node::Rational(r) => match r.numerator().checked_sub(r.denominator()) {
            Some(p) => Node::rational(p, r.denominator()).unwrap_or(Node::number(r.value() - 1.0)),
            None => Node::number(r.value() - 1.0),
        },
        other => build::sub(other.clone(), Node::integer(1)),
    }
}

/// Differentiate a tree with respect to `variable`, returning a new tree.
///
/// # Example
/// ```
/// use mathexpr::{differentiate, parse};
///
/// let tree = parse("sin(x)").unwrap();
/// let derivative = differentiate(&tree, "x").unwrap();
/// assert_eq!(derivative, parse("cos(x)").unwrap());
/// ```
///
/// # Errors
/// `UnknownFunction` for a function without a derivative rule,
/// `DivisionByZero` when a quotient rule denominator is a literal zero.
pub fn differentiate(node: &Node, variable: &str) -> Result<Node, MathError> {
    node.accept(&mut Differentiator::new(variable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_base_cases() {
        assert_eq!(
            differentiate(&Node::integer(5), "x").unwrap(),
            Node::number(0.0)
        );
        assert_eq!(
            differentiate(&Node::number(2.5), "x").unwrap(),
            Node::number(0.0)
        );
        assert_eq!(
            differentiate(&Node::constant("pi"), "x").unwrap(),
            Node::number(0.0)
        );
        assert_eq!(
            differentiate(&Node::variable("x"), "x").unwrap(),
            Node::number(1.0)
        );
        assert_eq!(
            differentiate(&Node::variable("y"), "x").unwrap(),
            Node::number(0.0)
        );
        assert_eq!(
            differentiate(&Node::rational(1, 2).unwrap(), "x").unwrap(),
            Node::number(0.0)
        );
    }

    #[test]
    fn test_sum_and_difference() {
        let tree = parse("x+1").unwrap();
        assert_eq!(differentiate(&tree, "x").unwrap(), Node::number(1.0));

        let tree = parse("x-y").unwrap();
        assert_eq!(differentiate(&tree, "x").unwrap(), Node::number(1.0));
        assert_eq!(
            differentiate(&tree, "y").unwrap(),
            Node::number(-1.0)
        );
    }

    #[test]
    fn test_unary_minus_rule() {
        let tree = parse("-sin(x)").unwrap();
        let derivative = differentiate(&tree, "x").unwrap();
        assert_eq!(derivative, Node::unary_minus(parse("cos(x)").unwrap()));
    }

    #[test]
    fn test_power_rule_literal_exponent() {
        // d/dx x^2 = 2*x
        let tree = parse("x^2").unwrap();
        assert_eq!(differentiate(&tree, "x").unwrap(), parse("2x").unwrap());

        // d/dx x^1 degenerates to 1
        let tree = parse("x^1").unwrap();
        assert_eq!(
            differentiate(&tree, "x").unwrap(),
            Node::number(1.0)
        );

        // d/dx x^0 degenerates to 0
        let tree = parse("x^0").unwrap();
        assert_eq!(
            differentiate(&tree, "x").unwrap(),
            Node::integer(0)
        );
    }

    #[test]
    fn test_quotient_rule_zero_denominator() {
        let tree = parse("x/0").unwrap();
        assert_eq!(
            differentiate(&tree, "x"),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_unknown_function() {
        let tree = Node::function("mystery", Node::variable("x"));
        assert_eq!(
            differentiate(&tree, "x"),
            Err(MathError::unknown_function("mystery"))
        );
    }

    #[test]
    fn test_exponential_with_constant_base() {
        // d/dx 2^x = 2^x * log(2)
        let tree = parse("2^x").unwrap();
        let derivative = differentiate(&tree, "x").unwrap();
        assert_eq!(derivative, parse("2^x*log(2)").unwrap());
    }

    #[test]
    fn test_derivative_is_reusable() {
        // second derivative of x^3 is 6x numerically
        let tree = parse("x^3").unwrap();
        let first = differentiate(&tree, "x").unwrap();
        let second = differentiate(&first, "x").unwrap();

        let mut env = crate::evaluator::Environment::default();
        env.insert("x".to_string(), 2.5);
        assert!((crate::evaluator::evaluate(&second, &env).unwrap() - 15.0).abs() < 1e-12);
    }
}
