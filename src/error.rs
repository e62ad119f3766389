use std::fmt;

/// Errors raised while tokenizing, parsing, evaluating or differentiating
/// an expression.
///
/// Every error is raised at the point of detection and propagated to the
/// caller; a single error aborts the whole operation for that input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// No token definition matched at the given byte offset
    UnknownToken { position: usize },
    /// Malformed operand/operator sequence
    SyntaxError { msg: String },
    /// Unbalanced parentheses
    ParenthesisMismatch,
    /// Operator outside the fixed set `+ - * / ^`
    UnknownOperator { symbol: char },
    /// Function name without a definition
    UnknownFunction { name: String },
    /// Constant name the evaluator cannot resolve
    UnknownConstant { name: String },
    /// Variable absent from the evaluation environment
    UnknownVariable { name: String },
    /// Division (or rational construction) with a zero denominator
    DivisionByZero,
}

impl MathError {
    /// Create a SyntaxError from any string-like message
    pub fn syntax(msg: impl Into<String>) -> Self {
        MathError::SyntaxError { msg: msg.into() }
    }

    /// Create an UnknownFunction error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        MathError::UnknownFunction { name: name.into() }
    }

    /// Create an UnknownConstant error
    pub fn unknown_constant(name: impl Into<String>) -> Self {
        MathError::UnknownConstant { name: name.into() }
    }

    /// Create an UnknownVariable error
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        MathError::UnknownVariable { name: name.into() }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::UnknownToken { position } => {
                write!(f, "Unknown token at position {}", position + 1)
            }
            MathError::SyntaxError { msg } => write!(f, "Syntax error: {}", msg),
            MathError::ParenthesisMismatch => write!(f, "Mismatched parentheses"),
            MathError::UnknownOperator { symbol } => {
                write!(f, "Unknown operator '{}'", symbol)
            }
            MathError::UnknownFunction { name } => {
                write!(f, "Unknown function '{}'", name)
            }
            MathError::UnknownConstant { name } => {
                write!(f, "Unknown constant '{}'", name)
            }
            MathError::UnknownVariable { name } => {
                write!(f, "Unknown variable '{}'", name)
            }
            MathError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for MathError {}
