//! Implicit multiplication insertion for natural notation.
//!
//! Inserts `*` tokens between adjacent factor-like tokens, e.g. `2x` →
//! `2 * x`, before the stream reaches the shunting-yard engine.

use crate::parser::tokens::{Token, TokenKind};

/// Check if a multiplication token belongs between two adjacent tokens.
///
/// The first token must be able to end a factor, the second to begin one.
/// A function name followed by an open parenthesis is a function call, not
/// a product.
fn should_insert_mul(current: &Token, next: &Token) -> bool {
    let ends_factor = matches!(
        current.kind,
        TokenKind::PosInt
            | TokenKind::Identifier
            | TokenKind::Constant
            | TokenKind::FunctionName
            | TokenKind::CloseParen
    );
    if !ends_factor {
        return false;
    }

    let begins_factor = matches!(
        next.kind,
        TokenKind::PosInt
            | TokenKind::Identifier
            | TokenKind::Constant
            | TokenKind::FunctionName
            | TokenKind::OpenParen
    );
    if !begins_factor {
        return false;
    }

    !(current.kind == TokenKind::FunctionName && next.kind == TokenKind::OpenParen)
}

/// Insert implicit multiplication tokens where two factors are adjacent.
pub(crate) fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    if tokens.is_empty() {
        return tokens;
    }

    let needs_insertion = tokens
        .windows(2)
        .any(|w| should_insert_mul(&w[0], &w[1]));
    if !needs_insertion {
        return tokens;
    }

    let mut result = Vec::with_capacity(tokens.len() * 2);
    let mut it = tokens.into_iter().peekable();

    while let Some(current) = it.next() {
        let needs_mul = it
            .peek()
            .is_some_and(|next| should_insert_mul(&current, next));

        result.push(current);
        if needs_mul {
            result.push(Token::new("*", TokenKind::Mul));
        }
    }

    result
}
