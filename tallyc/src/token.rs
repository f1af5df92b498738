use std::fmt::Display;

use tallyspan::Span;

use crate::number::Number;

/// Every lexical category the front-end knows about. The tokenizer produces
/// all of them; the evaluator only consumes numbers and the four arithmetic
/// operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Float,

    Plus,
    Minus,
    Mult,
    Div,
    Mod,

    Eq,
    Gt,
    Lt,
    Ne,

    And,
    Or,
    Xor,
    Not,

    Extends,
    Range,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    If,
    Else,
    While,
    For,
    Call,
    Channel,
    Var,

    Symbol,
    Terminator,
}

impl TokenKind {
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Mult | Self::Div)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Symbol => write!(f, "identifier"),
            Self::Terminator => write!(f, "';'"),

            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Mult => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Mod => write!(f, "'%'"),
            Self::Eq => write!(f, "'='"),
            Self::Gt => write!(f, "'>'"),
            Self::Lt => write!(f, "'<'"),
            Self::Ne => write!(f, "'!='"),
            Self::And => write!(f, "'&'"),
            Self::Or => write!(f, "'|'"),
            Self::Xor => write!(f, "'^'"),
            Self::Not => write!(f, "'!'"),
            Self::Extends => write!(f, "'@>'"),
            Self::Range => write!(f, "'...'"),

            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),

            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::For => write!(f, "'for'"),
            Self::Call => write!(f, "'call'"),
            Self::Channel => write!(f, "'channel'"),
            Self::Var => write!(f, "'var'"),
        }
    }
}

/// Payload of a token: the parsed value for numeric literals, the exact
/// source text for everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'a> {
    Number(Number),
    Text(&'a str),
}

impl Display for TokenValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind:  TokenKind,
    pub value: TokenValue<'a>,
    pub span:  Span,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(kind: TokenKind, value: TokenValue<'a>, span: Span) -> Self {
        Self { kind, value, span }
    }

    #[must_use]
    pub const fn number(&self) -> Option<Number> {
        match self.value {
            TokenValue::Number(x) => Some(x),
            TokenValue::Text(_) => None,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} {} @{}..{}",
            self.kind,
            self.value,
            self.span.lo(),
            self.span.hi()
        )
    }
}
