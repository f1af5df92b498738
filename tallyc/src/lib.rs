use tallyspan::Span;

use crate::evaluator::{EvalError, EvalResult, Evaluator, ParseError};
use crate::keyword::LexConfig;
use crate::lexer::{LexError, LexResult, Lexer};
use crate::number::Number;
use crate::source::{Cursor, Stream};
use crate::token::Token;

pub mod evaluator;
pub mod keyword;
pub mod lexer;
pub mod number;
pub mod source;
pub mod token;

/// Terminal failure of any pass. Nothing is recovered; the first error wins.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(err) => err.span,
            Self::Parse(err) => err.span,
            Self::Eval(err) => err.span,
        }
    }
}

pub fn tokenize(source: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(source).lex_all()
}

pub fn tokenize_with<'a>(source: &'a str, config: &'a LexConfig) -> LexResult<Vec<Token<'a>>> {
    Lexer::with_config(source, config).lex_all()
}

/// Evaluates one expression starting at token `start`, returning its value
/// and the index of the first token after it.
///
/// When no token is left at `start`, the end of input is placed after the
/// token preceding `start`.
pub fn evaluate(tokens: &[Token<'_>], start: usize) -> EvalResult<(Number, usize)> {
    let mut evaluator = Evaluator::new(Cursor::at(tokens, start));
    let value = evaluator.expr()?;
    Ok((value, evaluator.offset()))
}

/// Evaluates one expression pulling tokens straight from the lexer.
pub fn evaluate_stream(source: &str) -> EvalResult<Number> {
    Evaluator::new(Stream::new(Lexer::new(source))).expr()
}

/// Evaluates every `;`-separated expression of the sequence.
pub fn evaluate_all(tokens: &[Token<'_>]) -> EvalResult<Vec<Number>> {
    Evaluator::new(Cursor::new(tokens)).statements()
}

pub fn run(source: &str) -> EvalResult<Vec<Number>> {
    let tokens = tokenize(source)?;
    evaluate_all(&tokens)
}
