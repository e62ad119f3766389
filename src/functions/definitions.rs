//! The derivative and evaluation table for all recognized functions.
//!
//! Derivative rules receive the operand subtree `g` and the inner
//! derivative `g'`, and compose the chain rule through the simplifying
//! constructors, so `d/dx sin(x)` comes out as `cos(x)` rather than
//! `1 * cos(x)`.

use std::f64::consts::PI;

use crate::ast::constructors as build;
use crate::ast::Node;
use crate::error::MathError;
use crate::functions::registry::FunctionDefinition;

/// `g^2` as a tree
fn square(g: &Node) -> Node {
    build::pow(g.clone(), Node::integer(2))
}

/// `sqrt(inner)` as a tree
fn sqrt_of(inner: Node) -> Node {
    Node::function("sqrt", inner)
}

fn d_sin(g: &Node, inner: Node) -> Result<Node, MathError> {
    Ok(build::mul(inner, Node::function("cos", g.clone())))
}

fn d_cos(g: &Node, inner: Node) -> Result<Node, MathError> {
    Ok(build::mul(
        inner,
        build::neg(Node::function("sin", g.clone())),
    ))
}

fn d_tan(g: &Node, inner: Node) -> Result<Node, MathError> {
    let tan_square = build::pow(Node::function("tan", g.clone()), Node::integer(2));
    Ok(build::mul(inner, build::add(Node::integer(1), tan_square)))
}

fn d_cot(g: &Node, inner: Node) -> Result<Node, MathError> {
    let cot_square = build::pow(Node::function("cot", g.clone()), Node::integer(2));
    Ok(build::mul(
        inner,
        build::neg(build::add(Node::integer(1), cot_square)),
    ))
}

fn d_arcsin(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = sqrt_of(build::sub(Node::integer(1), square(g)));
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

fn d_arccos(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = sqrt_of(build::sub(Node::integer(1), square(g)));
    Ok(build::mul(
        inner,
        build::neg(build::div(Node::integer(1), denom)?),
    ))
}

fn d_arctan(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = build::add(Node::integer(1), square(g));
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

fn d_arccot(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = build::add(Node::integer(1), square(g));
    Ok(build::mul(
        inner,
        build::neg(build::div(Node::integer(1), denom)?),
    ))
}

fn d_exp(g: &Node, inner: Node) -> Result<Node, MathError> {
    Ok(build::mul(inner, Node::function("exp", g.clone())))
}

fn d_log(g: &Node, inner: Node) -> Result<Node, MathError> {
    Ok(build::mul(
        inner,
        build::div(Node::integer(1), g.clone())?,
    ))
}

fn d_lg(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = build::mul(
        Node::function("log", Node::integer(10)),
        g.clone(),
    );
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

fn d_sqrt(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = build::mul(Node::integer(2), sqrt_of(g.clone()));
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

fn d_sinh(g: &Node, inner: Node) -> Result<Node, MathError> {
    Ok(build::mul(inner, Node::function("cosh", g.clone())))
}

fn d_cosh(g: &Node, inner: Node) -> Result<Node, MathError> {
    Ok(build::mul(inner, Node::function("sinh", g.clone())))
}

fn d_tanh(g: &Node, inner: Node) -> Result<Node, MathError> {
    let tanh_square = build::pow(Node::function("tanh", g.clone()), Node::integer(2));
    Ok(build::mul(inner, build::sub(Node::integer(1), tanh_square)))
}

fn d_coth(g: &Node, inner: Node) -> Result<Node, MathError> {
    let coth_square = build::pow(Node::function("coth", g.clone()), Node::integer(2));
    Ok(build::mul(inner, build::sub(Node::integer(1), coth_square)))
}

fn d_arsinh(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = sqrt_of(build::add(square(g), Node::integer(1)));
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

fn d_arcosh(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = sqrt_of(build::sub(square(g), Node::integer(1)));
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

fn d_artanh(g: &Node, inner: Node) -> Result<Node, MathError> {
    let denom = build::sub(Node::integer(1), square(g));
    Ok(build::mul(inner, build::div(Node::integer(1), denom)?))
}

pub(crate) fn all_definitions() -> Vec<FunctionDefinition> {
    vec![
        FunctionDefinition {
            name: "sin",
            eval: f64::sin,
            derivative: d_sin,
        },
        FunctionDefinition {
            name: "cos",
            eval: f64::cos,
            derivative: d_cos,
        },
        FunctionDefinition {
            name: "tan",
            eval: f64::tan,
            derivative: d_tan,
        },
        FunctionDefinition {
            name: "cot",
            eval: |x| 1.0 / x.tan(),
            derivative: d_cot,
        },
        FunctionDefinition {
            name: "arcsin",
            eval: f64::asin,
            derivative: d_arcsin,
        },
        FunctionDefinition {
            name: "arccos",
            eval: f64::acos,
            derivative: d_arccos,
        },
        FunctionDefinition {
            name: "arctan",
            eval: f64::atan,
            derivative: d_arctan,
        },
        FunctionDefinition {
            name: "arccot",
            eval: |x| PI / 2.0 - x.atan(),
            derivative: d_arccot,
        },
        FunctionDefinition {
            name: "exp",
            eval: f64::exp,
            derivative: d_exp,
        },
        FunctionDefinition {
            name: "log",
            eval: f64::ln,
            derivative: d_log,
        },
        FunctionDefinition {
            name: "lg",
            eval: f64::log10,
            derivative: d_lg,
        },
        FunctionDefinition {
            name: "sqrt",
            eval: f64::sqrt,
            derivative: d_sqrt,
        },
        FunctionDefinition {
            name: "sinh",
            eval: f64::sinh,
            derivative: d_sinh,
        },
        FunctionDefinition {
            name: "cosh",
            eval: f64::cosh,
            derivative: d_cosh,
        },
        FunctionDefinition {
            name: "tanh",
            eval: f64::tanh,
            derivative: d_tanh,
        },
        FunctionDefinition {
            name: "coth",
            eval: |x| 1.0 / x.tanh(),
            derivative: d_coth,
        },
        FunctionDefinition {
            name: "arsinh",
            eval: f64::asinh,
            derivative: d_arsinh,
        },
        FunctionDefinition {
            name: "arcosh",
            eval: f64::acosh,
            derivative: d_arcosh,
        },
        FunctionDefinition {
            name: "artanh",
            eval: f64::atanh,
            derivative: d_artanh,
        },
        FunctionDefinition {
            name: "arcoth",
            eval: |x| (1.0 / x).atanh(),
            // same rule as artanh: 1/(1 - x^2)
            derivative: d_artanh,
        },
    ]
}
