//! Parser module - converts expression strings to AST trees.

mod implicit_mul;
pub mod lexer;
mod shunting_yard;
pub mod tokens;

pub use lexer::{Lexer, TokenDefinition, std_math_lexer, tokenize};
pub use tokens::{Associativity, Token, TokenKind};

use crate::ast::Node;
use crate::error::MathError;

/// Token-stream parser with a switchable implicit-multiplication step.
///
/// The default parser inserts `*` between adjacent factors (`2x`, `2(x+1)`,
/// `x sin(x)`); a parser built with
/// [`without_implicit_multiplication`](Parser::without_implicit_multiplication)
/// leaves the stream untouched, so adjacent factors surface as a
/// `SyntaxError` (leftover operands).
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    implicit_multiplication: bool,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            implicit_multiplication: true,
        }
    }

    pub fn without_implicit_multiplication() -> Self {
        Parser {
            implicit_multiplication: false,
        }
    }

    /// Parse a token stream into a single tree.
    ///
    /// Pipeline: filter whitespace -> implicit multiplication -> shunting
    /// yard. Whitespace tokens are carried this far (not dropped by the
    /// lexer) so lexer error positions stay accurate.
    ///
    /// # Errors
    /// `SyntaxError` for malformed operand/operator sequences,
    /// `ParenthesisMismatch` for unbalanced parentheses.
    pub fn parse(&self, tokens: Vec<Token>) -> Result<Node, MathError> {
        let tokens = filter_whitespace(tokens);

        let tokens = if self.implicit_multiplication {
            implicit_mul::insert_implicit_multiplication(tokens)
        } else {
            tokens
        };

        shunting_yard::shunting_yard(&tokens)
    }

    /// Tokenize with the standard vocabulary, then parse.
    pub fn parse_str(&self, input: &str) -> Result<Node, MathError> {
        self.parse(tokenize(input)?)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

fn filter_whitespace(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .collect()
}

/// Parse an expression string with the default parser.
///
/// # Example
/// ```
/// use mathexpr::parse;
///
/// let tree = parse("2x^2 + sin(x)/y").unwrap();
/// assert!(tree.complexity() > 1);
/// ```
///
/// # Errors
/// `UnknownToken` from the tokenizer, `SyntaxError` or
/// `ParenthesisMismatch` from the parser.
pub fn parse(input: &str) -> Result<Node, MathError> {
    Parser::new().parse_str(input)
}
