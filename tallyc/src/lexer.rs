use std::str::Chars;

use log::{debug, trace};
use tallyspan::{Span, Spand};
use thiserror::Error;

use crate::keyword::{LexConfig, WordPolicy};
use crate::number::Number;
use crate::token::{Token, TokenKind, TokenValue};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),
    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
}

/// Character classes, listed in the order the lexer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Whitespace,
    Operator,
    Bracket,
    Alpha,
    Terminator,
}

impl CharClass {
    #[must_use]
    pub const fn of(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit),
            ' ' | '\t' | '\n' | '\r' => Some(Self::Whitespace),
            '+' | '-' | '*' | '/' | '%' | '~' | '<' | '>' | '!' | '|' | '^' | '&' | '=' | '@'
            | '.' => Some(Self::Operator),
            '(' | ')' | '{' | '}' | '[' | ']' => Some(Self::Bracket),
            'a'..='z' | 'A'..='Z' | '$' => Some(Self::Alpha),
            ';' => Some(Self::Terminator),
            _ => None,
        }
    }
}

const fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$')
}

pub struct Lexer<'a> {
    input:  &'a str,
    chars:  Chars<'a>,
    config: &'a LexConfig,

    /// start byte position of current token
    byte_start: u32,

    /// byte position of cursor
    byte: u32,
}

const EOF: char = '\0';

pub type LexError = Spand<LexErrorKind>;
pub type LexResult<T> = Result<T, LexError>;

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &LexConfig::DEFAULT)
    }

    #[must_use]
    pub fn with_config(input: &'a str, config: &'a LexConfig) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            config,
            byte_start: 0,
            byte: 0,
        }
    }

    /// Scans the whole input, stopping at the first error.
    pub fn lex_all(self) -> LexResult<Vec<Token<'a>>> {
        let tokens = self.collect::<LexResult<Vec<_>>>()?;
        debug!("scanned {} tokens", tokens.len());
        Ok(tokens)
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    fn second(&self) -> char {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().unwrap_or(EOF)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn bump(&mut self) -> Option<char> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars
            .next()
            .inspect(|c| self.byte += c.len_utf8() as u32)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.first()) {
            self.bump();
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(self.byte_start, self.byte)
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start as usize..self.byte as usize]
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.make_span())
    }

    fn text_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, TokenValue::Text(self.view()), self.make_span())
    }

    fn number(&mut self, first: char) -> LexResult<Token<'a>> {
        let hex = first == '0' && matches!(self.first(), 'x' | 'X');
        let mut float = false;

        if hex {
            self.bump();
            self.eat_while(|c| c.is_ascii_hexdigit() || c == '_');
        } else {
            self.eat_while(|c| c.is_ascii_digit() || c == '_');
            // a second '.' makes it a range, as in `1..3`
            if self.first() == '.' && self.second() != '.' {
                float = true;
                self.bump();
                self.eat_while(|c| c.is_ascii_digit() || c == '_');
            }
        }

        // glued letters belong to the literal so it is reported whole
        self.eat_while(is_word);

        let text = self.view();
        let malformed = || self.error(LexErrorKind::MalformedNumber(text.to_string()));
        let digits = text.replace('_', "");

        let (kind, value) = if hex {
            let digits = &digits[2..];
            if digits.is_empty() {
                return Err(malformed());
            }
            let value = i64::from_str_radix(digits, 16).map_err(|_| malformed())?;
            (TokenKind::Integer, Number::Int(value))
        } else if !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return Err(malformed());
        } else if float {
            let value = digits.parse::<f64>().map_err(|_| malformed())?;
            let underflow = value == 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
            if !value.is_finite() || underflow {
                return Err(malformed());
            }
            (TokenKind::Float, Number::Float(value))
        } else {
            let value = digits.parse::<i64>().map_err(|_| malformed())?;
            (TokenKind::Integer, Number::Int(value))
        };

        Ok(Token::new(kind, TokenValue::Number(value), self.make_span()))
    }

    fn operator(&mut self, c: char) -> LexResult<Token<'a>> {
        macro_rules! token {
            ($name:ident) => {
                Ok(self.text_token(TokenKind::$name))
            };
            ($tk:ident $(, $cont:literal => $cont_tk:ident)+) => {
                match self.first() {
                    $(
                        $cont => {
                            self.bump();
                            token!($cont_tk)
                        }
                    )+
                    _ => token!($tk),
                }
            };
        }

        match c {
            '.' if self.first() == '.' && self.second() == '.' => {
                self.bump();
                self.bump();
                token!(Range)
            }
            '.' if self.first() == '.' => {
                self.bump();
                token!(Range)
            }
            '@' if self.first() == '>' => {
                self.bump();
                token!(Extends)
            }

            '+' => token!(Plus, '=' => Plus),
            '-' => token!(Minus, '=' => Minus),
            '*' => token!(Mult, '=' => Mult),
            '/' => token!(Div, '=' => Div),
            '%' => token!(Mod, '=' => Mod),
            '>' => token!(Gt, '=' => Gt),
            '<' => token!(Lt, '=' => Lt),
            '!' => token!(Not, '=' => Ne),
            '=' => token!(Eq, '=' => Eq, '>' => Eq),

            '~' => token!(Not),
            '&' => token!(And),
            '|' => token!(Or),
            '^' => token!(Xor),

            // '.' and '@' have no single-character form
            _ => Err(self.error(LexErrorKind::UnrecognizedCharacter(c))),
        }
    }

    fn bracket(&self, c: char) -> Token<'a> {
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            _ => TokenKind::RBracket,
        };
        self.text_token(kind)
    }

    fn word(&mut self) -> LexResult<Token<'a>> {
        self.eat_while(is_word);
        let s = self.view();
        match (self.config.keywords.lookup(s), self.config.words) {
            (Some(kind), _) => Ok(self.text_token(kind)),
            (None, WordPolicy::Symbol) => Ok(self.text_token(TokenKind::Symbol)),
            (None, WordPolicy::Reject) => {
                Err(self.error(LexErrorKind::UnknownKeyword(s.to_string())))
            }
        }
    }

    pub fn next_token(&mut self) -> Option<LexResult<Token<'a>>> {
        let token = loop {
            self.byte_start = self.byte;
            let c = self.bump()?;

            let Some(class) = CharClass::of(c) else {
                return Some(Err(self.error(LexErrorKind::UnrecognizedCharacter(c))));
            };

            break match class {
                CharClass::Whitespace => continue,
                CharClass::Digit => self.number(c),
                CharClass::Operator => self.operator(c),
                CharClass::Bracket => Ok(self.bracket(c)),
                CharClass::Alpha => self.word(),
                CharClass::Terminator => Ok(self.text_token(TokenKind::Terminator)),
            };
        };

        if let Ok(token) = &token {
            trace!("{token}");
        }
        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
