use std::fmt::Display;

use log::{debug, trace};
use tallyspan::{Span, Spand};

use crate::Error;
use crate::number::Number;
use crate::source::TokenSource;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Number,
    Terminator,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Terminator => write!(f, "';' or end of input"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: TokenKind },
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: Expected },
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    #[error("cannot divide by zero")]
    DivisionByZero,
}

pub type ParseError = Spand<ParseErrorKind>;
pub type EvalError = Spand<EvalErrorKind>;
pub type EvalResult<T> = Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Mult => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            _ => None,
        }
    }

    /// `None` only for a division by zero.
    #[must_use]
    pub fn apply(self, lhs: Number, rhs: Number) -> Option<Number> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div => lhs.checked_div(rhs),
        }
    }
}

/// Evaluates flat arithmetic over any [`TokenSource`].
///
/// ```text
/// expr := term ( (PLUS|MINUS|MULT|DIV) term )*
/// term := NUMBER
/// ```
///
/// All four operators share one precedence level and fold left to right,
/// so `1+2*3` is `9`.
pub struct Evaluator<S> {
    source: S,
}

impl<'a, S: TokenSource<'a>> Evaluator<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Index of the first token the evaluator has not consumed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.source.offset()
    }

    fn peek(&mut self) -> EvalResult<Option<Token<'a>>> {
        Ok(self.source.peek()?)
    }

    fn eat(&mut self) {
        self.source.bump();
    }

    /// Empty span right after the last token read before the end of input.
    fn end_span(&self) -> Span {
        Span::point(self.source.last_span().hi())
    }

    fn next_op(&mut self) -> EvalResult<Option<ArithOp>> {
        Ok(self.peek()?.and_then(|tk| ArithOp::from_token(tk.kind)))
    }

    pub fn term(&mut self) -> EvalResult<Spand<Number>> {
        let Some(token) = self.peek()? else {
            let kind = ParseErrorKind::UnexpectedEnd {
                expected: Expected::Number,
            };
            return Err(ParseError::new(kind, self.end_span()).into());
        };

        match token.number() {
            Some(value) if token.kind.is_number() => {
                self.eat();
                Ok(Spand::new(value, token.span))
            }
            _ => {
                let kind = ParseErrorKind::UnexpectedToken {
                    expected: Expected::Number,
                    found:    token.kind,
                };
                Err(ParseError::new(kind, token.span).into())
            }
        }
    }

    pub fn expr(&mut self) -> EvalResult<Number> {
        let mut acc = self.term()?.kind;

        while let Some(op) = self.next_op()? {
            self.eat();
            // the right operand is read exactly once, then checked and used
            let rhs = self.term()?;
            acc = op
                .apply(acc, rhs.kind)
                .ok_or_else(|| EvalError::new(EvalErrorKind::DivisionByZero, rhs.span))?;
            trace!("{op:?} {} => {acc}", rhs.kind);
        }

        debug!("expression evaluated to {acc}");
        Ok(acc)
    }

    /// Evaluates `expr (';' expr?)*`, skipping empty statements.
    pub fn statements(&mut self) -> EvalResult<Vec<Number>> {
        let mut values = Vec::new();

        while let Some(token) = self.peek()? {
            if token.kind == TokenKind::Terminator {
                self.eat();
                continue;
            }

            values.push(self.expr()?);

            match self.peek()? {
                None => break,
                Some(tk) if tk.kind == TokenKind::Terminator => self.eat(),
                Some(tk) => {
                    let kind = ParseErrorKind::UnexpectedToken {
                        expected: Expected::Terminator,
                        found:    tk.kind,
                    };
                    return Err(ParseError::new(kind, tk.span).into());
                }
            }
        }

        Ok(values)
    }
}
