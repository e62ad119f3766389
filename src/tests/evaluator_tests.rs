use crate::error::MathError;
use crate::evaluator::{Environment, evaluate};
use crate::parser::parse;

fn env(bindings: &[(&str, f64)]) -> Environment {
    bindings
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn test_power_tower_evaluates_right_associatively() {
    let tree = parse("2^3^2").unwrap();
    assert_eq!(evaluate(&tree, &env(&[])).unwrap(), 512.0);
}

#[test]
fn test_division_by_zero() {
    let tree = parse("3/0").unwrap();
    assert_eq!(evaluate(&tree, &env(&[])), Err(MathError::DivisionByZero));
}

#[test]
fn test_unbound_variable() {
    let tree = parse("x").unwrap();
    assert_eq!(
        evaluate(&tree, &env(&[])),
        Err(MathError::unknown_variable("x"))
    );
}

#[test]
fn test_full_pipeline_expression() {
    // the overview example: 2x^2 + sin(x)/y
    let tree = parse("2x^2+sin(x)/y").unwrap();
    let x = 1.2_f64;
    let y = 3.4_f64;
    let expected = 2.0 * x * x + x.sin() / y;
    let value = evaluate(&tree, &env(&[("x", x), ("y", y)])).unwrap();
    assert!((value - expected).abs() < 1e-12);
}

#[test]
fn test_nested_function_calls() {
    let tree = parse("sin(cos(x))").unwrap();
    let x = 0.8_f64;
    let value = evaluate(&tree, &env(&[("x", x)])).unwrap();
    assert!((value - x.cos().sin()).abs() < 1e-12);
}

#[test]
fn test_constants_in_context() {
    let tree = parse("2pi").unwrap();
    let value = evaluate(&tree, &env(&[])).unwrap();
    assert!((value - 2.0 * std::f64::consts::PI).abs() < 1e-12);

    let tree = parse("e^2").unwrap();
    let value = evaluate(&tree, &env(&[])).unwrap();
    assert!((value - std::f64::consts::E.powi(2)).abs() < 1e-12);
}

#[test]
fn test_negative_exponent() {
    let tree = parse("2^(0-2)").unwrap();
    assert_eq!(evaluate(&tree, &env(&[])).unwrap(), 0.25);
}

#[test]
fn test_unary_minus_in_context() {
    let tree = parse("-x^2+1").unwrap();
    // -(x^2) + 1 at x=2 is -3
    assert_eq!(evaluate(&tree, &env(&[("x", 2.0)])).unwrap(), -3.0);
}

#[test]
fn test_same_tree_many_environments() {
    // one immutable tree, many independent bindings
    let tree = parse("x^2-x").unwrap();
    for i in 0..10 {
        let x = i as f64;
        let value = evaluate(&tree, &env(&[("x", x)])).unwrap();
        assert_eq!(value, x * x - x);
    }
}
