use std::ops::Range;

use logos::Logos;
use tracing::debug;

use crate::{
    ast::Operator,
    error::{CompilationError, CompileResult},
};

/// A token as it comes out of the scanner, before numbers are interpreted.
///
/// Digit runs are kept as the text they were written as; they become integers
/// only once the whole input has been scanned. Whitespace produces nothing,
/// so it terminates a digit run without creating a token of its own.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Lexeme<'s> {
    /// `(`
    #[token("(")]
    BeginBracket,
    /// `)`
    #[token(")")]
    EndBracket,
    /// One of `+ - * /`. Operators are always a single character.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Op(Operator),
    /// A run of decimal digits, such as `42` or `007`.
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'s str),
}

/// The classification of a finished token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    BeginBracket,
    /// `)`
    EndBracket,
    /// `+`, `-`, `*` or `/`.
    Op(Operator),
    /// A non-negative integer literal.
    Number(i64),
}

/// A finished token together with the bytes of input it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Byte range of the token in the input.
    pub span: Range<usize>,
}

impl Token {
    /// Turns a scanned lexeme into a finished token, parsing digit runs.
    ///
    /// # Errors
    /// Returns `LiteralTooLarge` if a digit run does not fit into `i64`.
    pub fn finalize(lexeme: Lexeme<'_>, span: Range<usize>) -> CompileResult<Self> {
        let kind = match lexeme {
            Lexeme::BeginBracket => TokenKind::BeginBracket,
            Lexeme::EndBracket => TokenKind::EndBracket,
            Lexeme::Op(op) => TokenKind::Op(op),
            Lexeme::Number(digits) => {
                let value = digits.parse::<i64>().map_err(|_| {
                                                      CompilationError::LiteralTooLarge { literal:  digits.to_string(),
                                                                                          position: span.start, }
                                                  })?;
                TokenKind::Number(value)
            },
        };

        Ok(Self { kind, span })
    }

    /// Byte offset of the first character of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// The exact text of `input` this token was read from.
    ///
    /// `input` must be the string that was tokenized. Returns an empty string
    /// if the span does not lie within `input`.
    #[must_use]
    pub fn source<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.span.clone()).unwrap_or_default()
    }
}

/// Converts an input string into tokens.
///
/// # Errors
/// - `UnknownCharacter` for anything that is not whitespace, an ASCII digit,
///   a bracket or one of `+ - * /`.
/// - `LiteralTooLarge` for a digit run that overflows `i64`.
///
/// # Example
/// ```
/// use calctree::{
///     ast::Operator,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let kinds: Vec<_> = tokenize("12 + 3").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number(12), TokenKind::Op(Operator::Add), TokenKind::Number(3)]);
/// ```
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(input);

    while let Some(lexeme) = lexer.next() {
        if let Ok(lexeme) = lexeme {
            lexemes.push((lexeme, lexer.span()));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(CompilationError::UnknownCharacter { character,
                                                            position: lexer.span().start });
        }
    }

    let tokens = lexemes.into_iter()
                        .map(|(lexeme, span)| Token::finalize(lexeme, span))
                        .collect::<CompileResult<Vec<_>>>()?;

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
