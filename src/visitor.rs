//! Visitor contract for AST transformations.
//!
//! Every tree-walking component (evaluator, differentiator, renderers)
//! implements [`Visitor`] and is driven through [`Node::accept`], which
//! dispatches on the node kind. The node set is closed, so an implementor
//! that misses a kind fails to compile.

use crate::ast::{Node, Rational};

/// One visit method per node kind; `Output` is whatever the walker
/// produces (a number for the evaluator, a new tree for the
/// differentiator, a string for renderers).
pub trait Visitor {
    type Output;

    fn visit_number(&mut self, value: f64) -> Self::Output;

    fn visit_integer(&mut self, value: i64) -> Self::Output;

    fn visit_rational(&mut self, value: &Rational) -> Self::Output;

    fn visit_variable(&mut self, name: &str) -> Self::Output;

    fn visit_constant(&mut self, name: &str) -> Self::Output;

    fn visit_function(&mut self, name: &str, operand: &Node) -> Self::Output;

    /// `right` is `None` for unary minus.
    fn visit_expression(&mut self, left: &Node, op: char, right: Option<&Node>) -> Self::Output;
}

impl Node {
    /// Dispatch to the matching visit method.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Integer(value) => visitor.visit_integer(*value),
            Node::Rational(value) => visitor.visit_rational(value),
            Node::Variable(name) => visitor.visit_variable(name),
            Node::Constant(name) => visitor.visit_constant(name),
            Node::Function { name, operand } => visitor.visit_function(name, operand),
            Node::Expression { left, op, right } => {
                visitor.visit_expression(left, *op, right.as_deref())
            }
        }
    }
}
