//! Operator-precedence parsing with explicit operand and operator stacks.
//!
//! The operator stack is seeded with a minimal-precedence sentinel so the
//! reduction loop never has to special-case an empty stack. Both stacks are
//! local to one parse call; there is no cross-call state.

use crate::ast::Node;
use crate::error::MathError;
use crate::parser::tokens::{Associativity, Token, TokenKind};

/// Parse a preprocessed token stream (no whitespace) into a single tree.
pub(crate) fn shunting_yard(tokens: &[Token]) -> Result<Node, MathError> {
    Engine::new().run(tokens)
}

struct Engine {
    operator_stack: Vec<Token>,
    operand_stack: Vec<Node>,
}

impl Engine {
    fn new() -> Self {
        Engine {
            operator_stack: vec![Token::sentinel()],
            operand_stack: Vec::new(),
        }
    }

    fn run(mut self, tokens: &[Token]) -> Result<Node, MathError> {
        let mut last_kind = TokenKind::Sentinel;

        for token in tokens {
            match token.kind {
                TokenKind::PosInt | TokenKind::Identifier | TokenKind::Constant => {
                    // from_token returns a node for exactly these kinds
                    let node = Node::from_token(token)?
                        .ok_or_else(|| MathError::syntax("expected a terminal token"))?;
                    self.operand_stack.push(node);
                    last_kind = token.kind;
                }

                // Temporary markers: pushed unconditionally, resolved when
                // the matching close paren arrives.
                TokenKind::FunctionName | TokenKind::OpenParen => {
                    self.operator_stack.push(token.clone());
                    last_kind = token.kind;
                }

                TokenKind::CloseParen => {
                    self.close_parenthesis()?;
                    last_kind = token.kind;
                }

                TokenKind::Add | TokenKind::Sub if self.in_prefix_position(last_kind) => {
                    // A reclassified '+' is a no-op and leaves the previous
                    // token in place; a reclassified '-' becomes a unary
                    // minus, pushed without precedence comparison.
                    if token.kind == TokenKind::Sub {
                        self.operator_stack
                            .push(Token::new("-", TokenKind::UnaryMinus));
                        last_kind = TokenKind::UnaryMinus;
                    }
                }

                TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Pow => {
                    self.reduce_for(token)?;
                    self.operator_stack.push(token.clone());
                    last_kind = token.kind;
                }

                // Whitespace is filtered before parsing; anything else left
                // in the stream (a stray terminator, a hand-built sentinel)
                // cannot take part in an expression.
                TokenKind::UnaryMinus
                | TokenKind::Whitespace
                | TokenKind::Terminator
                | TokenKind::Sentinel => {
                    return Err(MathError::syntax(format!(
                        "unexpected token '{}'",
                        token.value.escape_debug()
                    )));
                }
            }
        }

        // Drain everything above the sentinel
        while self.operator_stack.len() > 1 {
            // stack length checked, pop cannot fail
            let popped = self
                .operator_stack
                .pop()
                .ok_or_else(|| MathError::syntax("operator stack underflow"))?;
            if popped.kind == TokenKind::OpenParen {
                return Err(MathError::ParenthesisMismatch);
            }
            let node = self.reduce(&popped)?;
            self.operand_stack.push(node);
        }

        let root = self
            .operand_stack
            .pop()
            .ok_or_else(|| MathError::syntax("empty expression"))?;
        if !self.operand_stack.is_empty() {
            return Err(MathError::syntax("leftover operands"));
        }

        Ok(root)
    }

    /// An Add/Sub token is unary when nothing has been consumed yet, or
    /// right after an open parenthesis, or right after another unary minus.
    fn in_prefix_position(&self, last_kind: TokenKind) -> bool {
        let at_start = self.operand_stack.is_empty()
            && self
                .operator_stack
                .last()
                .is_some_and(|t| t.kind == TokenKind::Sentinel);
        at_start || last_kind == TokenKind::OpenParen || last_kind == TokenKind::UnaryMinus
    }

    /// Standard reduction: pop while the incoming token binds no tighter
    /// than the stack top (strictly less, or equal when the incoming token
    /// is left-associative, so `1-2-3` is `(1-2)-3` while `2^3^2` is
    /// `2^(3^2)`).
    fn reduce_for(&mut self, token: &Token) -> Result<(), MathError> {
        loop {
            let top_precedence = match self.operator_stack.last() {
                Some(top) => top.precedence(),
                None => break,
            };
            let should_pop = token.precedence() < top_precedence
                || (token.precedence() == top_precedence
                    && token.associativity() == Associativity::Left);
            if !should_pop {
                break;
            }

            let popped = self
                .operator_stack
                .pop()
                .ok_or_else(|| MathError::syntax("operator stack underflow"))?;
            let node = self.reduce(&popped)?;
            self.operand_stack.push(node);
        }
        Ok(())
    }

    /// Pop and reduce until the matching open parenthesis, then wrap the
    /// parenthesized operand in a function node if a function name sits
    /// directly below.
    fn close_parenthesis(&mut self) -> Result<(), MathError> {
        loop {
            let popped = self
                .operator_stack
                .pop()
                .ok_or(MathError::ParenthesisMismatch)?;
            match popped.kind {
                TokenKind::Sentinel => return Err(MathError::ParenthesisMismatch),
                TokenKind::OpenParen => break,
                _ => {
                    let node = self.reduce(&popped)?;
                    self.operand_stack.push(node);
                }
            }
        }

        if self
            .operator_stack
            .last()
            .is_some_and(|t| t.kind == TokenKind::FunctionName)
        {
            let func = self
                .operator_stack
                .pop()
                .ok_or_else(|| MathError::syntax("operator stack underflow"))?;
            let operand = self
                .operand_stack
                .pop()
                .ok_or_else(|| MathError::syntax(format!("missing argument to '{}'", func.value)))?;
            self.operand_stack.push(Node::function(func.value, operand));
        }

        Ok(())
    }

    /// Turn one popped operator token into a node, consuming operands.
    fn reduce(&mut self, token: &Token) -> Result<Node, MathError> {
        match token.arity() {
            1 => {
                let operand = self
                    .operand_stack
                    .pop()
                    .ok_or_else(|| MathError::syntax("missing operand"))?;

                match token.kind {
                    TokenKind::UnaryMinus => Ok(negate_operand(operand)),
                    // FunctionName reduced outside a close-paren context
                    // (e.g. a dangling `sin` at end of input)
                    _ => Ok(Node::function(token.value.clone(), operand)),
                }
            }
            2 => {
                let right = self
                    .operand_stack
                    .pop()
                    .ok_or_else(|| MathError::syntax("missing right operand"))?;
                let left = self
                    .operand_stack
                    .pop()
                    .ok_or_else(|| MathError::syntax("missing left operand"))?;
                Node::expression(left, operator_symbol(token.kind)?, right)
            }
            _ => Err(MathError::syntax(format!(
                "cannot reduce token '{}'",
                token.value
            ))),
        }
    }
}

/// Fold unary minus over a numeric literal at parse time; otherwise build
/// the unary expression node.
fn negate_operand(operand: Node) -> Node {
    match operand {
        Node::Number(v) => Node::number(-v),
        Node::Integer(i) if i != i64::MIN => Node::integer(-i),
        Node::Rational(r) => match r.numerator().checked_neg() {
            Some(p) => Node::rational(p, r.denominator()).unwrap_or(Node::Rational(r)),
            None => Node::unary_minus(Node::Rational(r)),
        },
        other => Node::unary_minus(other),
    }
}

fn operator_symbol(kind: TokenKind) -> Result<char, MathError> {
    match kind {
        TokenKind::Add => Ok('+'),
        TokenKind::Sub => Ok('-'),
        TokenKind::Mul => Ok('*'),
        TokenKind::Div => Ok('/'),
        TokenKind::Pow => Ok('^'),
        _ => Err(MathError::syntax("not a binary operator")),
    }
}
