//! Tokenizer: ordered, anchored token definitions over the input text.
//!
//! Definitions are tried in registration order at the current cursor
//! position only; the first one that matches wins. A definition may carry a
//! canonical value so that synonyms (`ln` for `log`, `asin` for `arcsin`)
//! produce tokens under one name while the cursor still advances by the
//! matched text's length.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::MathError;
use crate::parser::tokens::{Token, TokenKind};

/// A single `(pattern, kind, canonical value?)` entry in the lexer.
pub struct TokenDefinition {
    pattern: Regex,
    kind: TokenKind,
    canonical: Option<&'static str>,
}

impl TokenDefinition {
    /// Compile a definition. The pattern is anchored to the match start:
    /// a `^` prefix is added if not already present.
    ///
    /// # Panics
    /// Panics if the pattern is not a valid regex; definitions are static
    /// vocabulary, so a bad pattern is a programming error.
    pub fn new(pattern: &str, kind: TokenKind) -> Self {
        Self::with_canonical_opt(pattern, kind, None)
    }

    /// Compile a definition whose matched text is replaced by `canonical`
    /// in the produced token.
    pub fn with_canonical(pattern: &str, kind: TokenKind, canonical: &'static str) -> Self {
        Self::with_canonical_opt(pattern, kind, Some(canonical))
    }

    fn with_canonical_opt(pattern: &str, kind: TokenKind, canonical: Option<&'static str>) -> Self {
        let anchored = if pattern.starts_with('^') {
            pattern.to_string()
        } else {
            format!("^(?:{})", pattern)
        };
        TokenDefinition {
            pattern: Regex::new(&anchored).expect("invalid token definition pattern"),
            kind,
            canonical,
        }
    }

    /// Try to match this definition at the start of `input`.
    fn matches(&self, input: &str) -> Option<Token> {
        let m = self.pattern.find(input)?;
        // Anchored patterns only ever match at the start; anything else
        // would mean the token begins later in the input and must not be
        // consumed here.
        debug_assert_eq!(m.start(), 0);

        let matched = m.as_str();
        let value = self.canonical.unwrap_or(matched);
        Some(Token::with_match_length(value, self.kind, matched.len()))
    }
}

/// An ordered list of token definitions.
pub struct Lexer {
    definitions: Vec<TokenDefinition>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer {
            definitions: Vec::new(),
        }
    }

    pub fn add(&mut self, definition: TokenDefinition) {
        self.definitions.push(definition);
    }

    /// Convert `input` into tokens, including whitespace and terminator
    /// tokens (filtering is the parser's job, keeping byte positions in
    /// error messages accurate).
    ///
    /// # Errors
    /// `MathError::UnknownToken` with the byte offset at which no
    /// definition matched.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, MathError> {
        let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
        let mut cursor = 0;

        while cursor < input.len() {
            let token = self
                .definitions
                .iter()
                .find_map(|def| def.matches(&input[cursor..]))
                .ok_or(MathError::UnknownToken { position: cursor })?;

            cursor += token.match_length;
            tokens.push(token);
        }

        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        std_math_lexer()
    }
}

/// The standard mathematical vocabulary.
///
/// Registration order matters: multi-character names must be tried before
/// their prefixes (`sinh` before `sin`, `exp` before the constant `e`) and
/// named constants before single-letter identifiers.
pub fn std_math_lexer() -> Lexer {
    let mut lexer = Lexer::new();

    lexer.add(TokenDefinition::new(r"\d+", TokenKind::PosInt));

    lexer.add(TokenDefinition::new("sqrt", TokenKind::FunctionName));

    lexer.add(TokenDefinition::new("sinh", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("cosh", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("tanh", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("coth", TokenKind::FunctionName));

    lexer.add(TokenDefinition::new("sin", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("cos", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("tan", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("cot", TokenKind::FunctionName));

    lexer.add(TokenDefinition::new("arsinh", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("arcosh", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("artanh", TokenKind::FunctionName));
    lexer.add(TokenDefinition::new("arcoth", TokenKind::FunctionName));

    lexer.add(TokenDefinition::with_canonical(
        "arcsin|asin",
        TokenKind::FunctionName,
        "arcsin",
    ));
    lexer.add(TokenDefinition::with_canonical(
        "arccos|acos",
        TokenKind::FunctionName,
        "arccos",
    ));
    lexer.add(TokenDefinition::with_canonical(
        "arctan|atan",
        TokenKind::FunctionName,
        "arctan",
    ));
    lexer.add(TokenDefinition::with_canonical(
        "arccot|acot",
        TokenKind::FunctionName,
        "arccot",
    ));

    lexer.add(TokenDefinition::new("exp", TokenKind::FunctionName));
    lexer.add(TokenDefinition::with_canonical(
        "log|ln",
        TokenKind::FunctionName,
        "log",
    ));
    lexer.add(TokenDefinition::new("lg", TokenKind::FunctionName));

    lexer.add(TokenDefinition::new(r"\(", TokenKind::OpenParen));
    lexer.add(TokenDefinition::new(r"\)", TokenKind::CloseParen));

    lexer.add(TokenDefinition::new(r"\+", TokenKind::Add));
    lexer.add(TokenDefinition::new("-", TokenKind::Sub));
    lexer.add(TokenDefinition::new(r"\*", TokenKind::Mul));
    lexer.add(TokenDefinition::new("/", TokenKind::Div));
    lexer.add(TokenDefinition::new(r"\^", TokenKind::Pow));

    lexer.add(TokenDefinition::new("pi", TokenKind::Constant));
    lexer.add(TokenDefinition::new("e", TokenKind::Constant));

    lexer.add(TokenDefinition::new("[a-zA-Z]", TokenKind::Identifier));

    lexer.add(TokenDefinition::new(r"\n", TokenKind::Terminator));
    lexer.add(TokenDefinition::new(r"\s+", TokenKind::Whitespace));

    lexer
}

/// Tokenize with the standard vocabulary.
///
/// The definition list is compiled once per process.
pub fn tokenize(input: &str) -> Result<Vec<Token>, MathError> {
    static LEXER: OnceLock<Lexer> = OnceLock::new();
    LEXER.get_or_init(std_math_lexer).tokenize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_and_operators() {
        let tokens = tokenize("3+5*7").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::PosInt,
                TokenKind::Add,
                TokenKind::PosInt,
                TokenKind::Mul,
                TokenKind::PosInt,
            ]
        );
        assert_eq!(tokens[0].value, "3");
        assert_eq!(tokens[4].value, "7");
    }

    #[test]
    fn test_whitespace_is_retained() {
        let tokens = tokenize("1 + 2").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[3].kind, TokenKind::Whitespace);
    }

    #[test]
    fn test_synonyms_yield_canonical_value() {
        let tokens = tokenize("ln(x)").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::FunctionName);
        assert_eq!(tokens[0].value, "log");
        // cursor advanced by the matched "ln", not the canonical "log"
        assert_eq!(tokens[0].match_length, 2);
        assert_eq!(tokens[1].kind, TokenKind::OpenParen);

        let tokens = tokenize("asin(x)").unwrap();
        assert_eq!(tokens[0].value, "arcsin");
        assert_eq!(tokens[0].match_length, 4);
    }

    #[test]
    fn test_hyperbolic_before_trig() {
        let tokens = tokenize("sinh(x)").unwrap();
        assert_eq!(tokens[0].value, "sinh");

        let tokens = tokenize("cosh(x)").unwrap();
        assert_eq!(tokens[0].value, "cosh");

        let tokens = tokenize("arcoth(x)").unwrap();
        assert_eq!(tokens[0].value, "arcoth");
    }

    #[test]
    fn test_constants_and_identifiers() {
        let tokens = tokenize("pi*e*x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Constant);
        assert_eq!(tokens[0].value, "pi");
        assert_eq!(tokens[2].kind, TokenKind::Constant);
        assert_eq!(tokens[2].value, "e");
        assert_eq!(tokens[4].kind, TokenKind::Identifier);
        assert_eq!(tokens[4].value, "x");
    }

    #[test]
    fn test_exp_wins_over_constant_e() {
        let tokens = tokenize("exp(x)").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::FunctionName);
        assert_eq!(tokens[0].value, "exp");
    }

    #[test]
    fn test_multi_letter_identifiers_split() {
        // xy is two variables, multiplied implicitly later by the parser
        let tokens = tokenize("xy").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, "x");
        assert_eq!(tokens[1].value, "y");
    }

    #[test]
    fn test_unknown_token_position() {
        let err = tokenize("1+#").unwrap_err();
        assert_eq!(err, MathError::UnknownToken { position: 2 });
    }
}
