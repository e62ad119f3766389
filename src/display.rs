// ASCII rendering for AST trees
use std::fmt;

use crate::ast::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e10 {
                    // Display as integer if no fractional part
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }

            Node::Integer(i) => write!(f, "{}", i),

            Node::Rational(r) => write!(f, "{}/{}", r.numerator(), r.denominator()),

            Node::Variable(name) | Node::Constant(name) => write!(f, "{}", name),

            Node::Function { name, operand } => write!(f, "{}({})", name, operand),

            Node::Expression {
                left,
                op: '-',
                right: None,
            } => {
                // Parenthesize weaker-binding operands: -(x + 1), but -x^2
                if precedence_of(left) < 25 {
                    write!(f, "-({})", left)
                } else {
                    write!(f, "-{}", left)
                }
            }

            Node::Expression {
                left,
                op,
                right: Some(right),
            } => {
                let parent = precedence_of(self);
                let left_needs_parens = match op {
                    // power is right-associative: (x^a)^b keeps its parens
                    '^' => precedence_of(left) <= parent,
                    _ => precedence_of(left) < parent,
                };
                let right_needs_parens = match op {
                    // a - (b + c) and a / (b * c) keep their grouping
                    '-' | '/' => precedence_of(right) <= parent,
                    '^' => precedence_of(right) < parent,
                    _ => precedence_of(right) < parent,
                };

                if left_needs_parens {
                    write!(f, "({})", left)?;
                } else {
                    write!(f, "{}", left)?;
                }

                if *op == '^' {
                    write!(f, "^")?;
                } else {
                    write!(f, " {} ", op)?;
                }

                if right_needs_parens {
                    write!(f, "({})", right)
                } else {
                    write!(f, "{}", right)
                }
            }

            // unary minus is the only None-right form the constructors emit
            Node::Expression { left, op, .. } => write!(f, "{}{}", op, left),
        }
    }
}

/// Effective binding strength for rendering; terminals and function
/// applications never need grouping.
fn precedence_of(node: &Node) -> i32 {
    node.precedence().unwrap_or(i32::MAX)
}
