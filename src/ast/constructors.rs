//! Simplifying node constructors, one per operator.
//!
//! The differentiator builds every subtree through these instead of raw
//! node construction; folding literals and dropping identities here keeps
//! derivative trees from growing combinatorially across repeated passes.
//!
//! Identity collapses (`x - x`, `x / x`, `x^0`) produce `Integer` literals,
//! the same variant the parser produces for literal source text, so
//! simplified trees compare structurally equal to parsed expectations.

use crate::ast::Node;
use crate::error::MathError;
use crate::traits::{is_one, is_zero};

/// `left + right`, folding literals and dropping zero terms.
///
/// Identity checks run before literal folding so a dropped term hands back
/// the other operand in its exact representation (`Integer(2) + 0.0` stays
/// `Integer(2)` rather than becoming `Number(2.0)`).
pub fn add(left: Node, right: Node) -> Node {
    if is_zero_literal(&left) {
        return right;
    }
    if is_zero_literal(&right) {
        return left;
    }
    if let Some(folded) = fold_literals(&left, '+', &right) {
        return folded;
    }

    raw(left, '+', right)
}

/// `left - right`, folding literals, dropping a zero subtrahend and
/// collapsing `x - x` to zero by structural equality.
pub fn sub(left: Node, right: Node) -> Node {
    if is_zero_literal(&right) {
        return left;
    }
    if let Some(folded) = fold_literals(&left, '-', &right) {
        return folded;
    }
    if left == right {
        return Node::integer(0);
    }

    raw(left, '-', right)
}

/// `-operand`, negating literals directly and cancelling double negation.
pub fn neg(operand: Node) -> Node {
    match operand {
        Node::Number(v) => Node::number(-v),
        Node::Integer(i) if i != i64::MIN => Node::integer(-i),
        Node::Rational(r) => match r.numerator().checked_neg() {
            Some(p) => Node::rational(p, r.denominator()).unwrap_or(Node::Rational(r)),
            None => Node::unary_minus(Node::Rational(r)),
        },
        Node::Expression {
            left, right: None, ..
        } => *left,
        other => Node::unary_minus(other),
    }
}

/// `left * right`, folding literals and applying the zero/one identities.
pub fn mul(left: Node, right: Node) -> Node {
    if is_zero_literal(&left) || is_zero_literal(&right) {
        return Node::integer(0);
    }
    if is_one_literal(&left) {
        return right;
    }
    if is_one_literal(&right) {
        return left;
    }
    if let Some(folded) = fold_literals(&left, '*', &right) {
        return folded;
    }

    raw(left, '*', right)
}

/// `left / right`, collapsing `x / x` to one by structural equality.
///
/// Literal quotients are left symbolic (exact rational arithmetic is a
/// separate concern); only the zero/one identities apply.
///
/// # Errors
/// `DivisionByZero` if the denominator is a literal zero.
pub fn div(left: Node, right: Node) -> Result<Node, MathError> {
    if is_zero_literal(&right) {
        return Err(MathError::DivisionByZero);
    }
    if is_one_literal(&right) {
        return Ok(left);
    }
    if is_zero_literal(&left) {
        return Ok(Node::integer(0));
    }
    if left == right {
        return Ok(Node::integer(1));
    }

    Ok(raw(left, '/', right))
}

/// `left ^ right`, folding numeric exponents and collapsing nested powers
/// `(x^a)^b` to `x^(a*b)` when both exponents are literals.
pub fn pow(left: Node, right: Node) -> Node {
    if right.is_numeric() {
        if is_zero_literal(&right) {
            return Node::integer(1);
        }
        if is_one_literal(&right) {
            return left;
        }
        if left.is_numeric() {
            return fold_pow(&left, &right);
        }
        if let Node::Expression {
            left: base,
            op: '^',
            right: Some(inner_exp),
        } = &left
            && inner_exp.is_numeric()
        {
            let exponent = mul((**inner_exp).clone(), right);
            return pow((**base).clone(), exponent);
        }
    }

    raw(left, '^', right)
}

/// Raw expression node; the operator is always one of the fixed set here,
/// so construction cannot fail.
fn raw(left: Node, op: char, right: Node) -> Node {
    Node::Expression {
        left: Box::new(left),
        op,
        right: Some(Box::new(right)),
    }
}

fn is_zero_literal(node: &Node) -> bool {
    node.numeric_value().is_some_and(is_zero)
}

fn is_one_literal(node: &Node) -> bool {
    node.numeric_value().is_some_and(is_one)
}

/// Fold `left op right` when both sides are numeric literals.
///
/// Integer pairs fold exactly (falling back to floating point on
/// overflow); any pair involving a `Number` or `Rational` folds through
/// `f64`.
fn fold_literals(left: &Node, op: char, right: &Node) -> Option<Node> {
    let (l, r) = (left.numeric_value()?, right.numeric_value()?);

    if let (Node::Integer(a), Node::Integer(b)) = (left, right) {
        let exact = match op {
            '+' => a.checked_add(*b),
            '-' => a.checked_sub(*b),
            '*' => a.checked_mul(*b),
            _ => None,
        };
        if let Some(value) = exact {
            return Some(Node::integer(value));
        }
    }

    let value = match op {
        '+' => l + r,
        '-' => l - r,
        '*' => l * r,
        _ => return None,
    };
    Some(Node::number(value))
}

/// Fold a literal base raised to a literal exponent.
fn fold_pow(base: &Node, exponent: &Node) -> Node {
    if let (Node::Integer(b), Node::Integer(e)) = (base, exponent)
        && let Ok(e) = u32::try_from(*e)
        && let Some(value) = b.checked_pow(e)
    {
        return Node::integer(value);
    }

    // numeric_value is Some for both: callers check is_numeric first
    let b = base.numeric_value().unwrap_or(f64::NAN);
    let e = exponent.numeric_value().unwrap_or(f64::NAN);
    Node::number(b.powf(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Node {
        Node::variable("x")
    }

    #[test]
    fn test_add_identities() {
        assert_eq!(add(x(), Node::integer(0)), x());
        assert_eq!(add(Node::integer(0), x()), x());
        assert_eq!(add(Node::integer(2), Node::integer(3)), Node::integer(5));
        assert_eq!(
            add(Node::number(1.5), Node::integer(1)),
            Node::number(2.5)
        );
        // dropping a float zero keeps the exact representation
        assert_eq!(add(Node::integer(2), Node::number(0.0)), Node::integer(2));
        // non-trivial sums stay symbolic
        assert_eq!(
            add(x(), Node::integer(1)),
            Node::expression(x(), '+', Node::integer(1)).unwrap()
        );
    }

    #[test]
    fn test_sub_identities() {
        assert_eq!(sub(x(), Node::integer(0)), x());
        assert_eq!(sub(Node::integer(5), Node::integer(3)), Node::integer(2));
        assert_eq!(sub(x(), x()), Node::integer(0));
        let sin_x = Node::function("sin", x());
        assert_eq!(sub(sin_x.clone(), sin_x), Node::integer(0));
        // the fold is a - b, not a + b
        assert_eq!(
            sub(x(), Node::integer(1)),
            Node::expression(x(), '-', Node::integer(1)).unwrap()
        );
    }

    #[test]
    fn test_neg() {
        assert_eq!(neg(Node::integer(5)), Node::integer(-5));
        assert_eq!(neg(Node::number(2.5)), Node::number(-2.5));
        assert_eq!(neg(x()), Node::unary_minus(x()));
        // double negation cancels
        assert_eq!(neg(Node::unary_minus(x())), x());
        let r = Node::rational(1, 2).unwrap();
        assert_eq!(neg(r), Node::rational(-1, 2).unwrap());
    }

    #[test]
    fn test_mul_identities() {
        assert_eq!(mul(x(), Node::integer(1)), x());
        assert_eq!(mul(Node::integer(1), x()), x());
        assert_eq!(mul(x(), Node::integer(0)), Node::integer(0));
        assert_eq!(mul(Node::integer(0), x()), Node::integer(0));
        assert_eq!(mul(Node::integer(2), Node::integer(3)), Node::integer(6));
        assert_eq!(mul(Node::number(1.0), x()), x());
        // dropping a float identity keeps the exact representation
        assert_eq!(mul(Node::integer(2), Node::number(1.0)), Node::integer(2));
    }

    #[test]
    fn test_div_identities() {
        assert_eq!(div(x(), Node::integer(1)).unwrap(), x());
        assert_eq!(div(Node::integer(0), x()).unwrap(), Node::integer(0));
        assert_eq!(div(x(), x()).unwrap(), Node::integer(1));
        assert_eq!(div(x(), Node::integer(0)), Err(MathError::DivisionByZero));
        // literal quotients stay symbolic
        assert_eq!(
            div(Node::integer(1), Node::integer(3)).unwrap(),
            Node::expression(Node::integer(1), '/', Node::integer(3)).unwrap()
        );
    }

    #[test]
    fn test_pow_identities() {
        assert_eq!(pow(x(), Node::integer(0)), Node::integer(1));
        assert_eq!(pow(x(), Node::integer(1)), x());
        assert_eq!(pow(Node::integer(2), Node::integer(10)), Node::integer(1024));
        assert_eq!(
            pow(Node::number(2.0), Node::number(0.5)),
            Node::number(2.0_f64.sqrt())
        );
    }

    #[test]
    fn test_nested_power_collapse() {
        // (x^2)^3 -> x^6
        let inner = pow(x(), Node::integer(2));
        let collapsed = pow(inner, Node::integer(3));
        assert_eq!(
            collapsed,
            Node::expression(x(), '^', Node::integer(6)).unwrap()
        );

        // (x^a)^b with symbolic a stays nested
        let symbolic = Node::expression(x(), '^', Node::variable("a")).unwrap();
        let kept = pow(symbolic.clone(), Node::integer(3));
        assert_eq!(
            kept,
            Node::expression(symbolic, '^', Node::integer(3)).unwrap()
        );
    }

    #[test]
    fn test_non_power_base_not_collapsed() {
        // (x*2)^3 must not be rewritten by the nested-power rule
        let product = Node::expression(x(), '*', Node::integer(2)).unwrap();
        let result = pow(product.clone(), Node::integer(3));
        assert_eq!(
            result,
            Node::expression(product, '^', Node::integer(3)).unwrap()
        );
    }
}
