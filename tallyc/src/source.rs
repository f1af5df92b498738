use tallyspan::Span;

use crate::lexer::{LexResult, Lexer};
use crate::token::Token;

/// Something the evaluator can read tokens from, one at a time.
pub trait TokenSource<'a> {
    /// The token under the cursor, without consuming it.
    fn peek(&mut self) -> LexResult<Option<Token<'a>>>;

    /// Consumes the token under the cursor.
    fn bump(&mut self);

    /// Index of the next unconsumed token.
    fn offset(&self) -> usize;

    /// Span of the token right before the cursor, or an empty span at the
    /// start of input.
    fn last_span(&self) -> Span;
}

/// Reads from an already scanned token sequence.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t, 'a> {
    tokens:  &'t [Token<'a>],
    current: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    #[must_use]
    pub const fn new(tokens: &'t [Token<'a>]) -> Self {
        Self::at(tokens, 0)
    }

    #[must_use]
    pub const fn at(tokens: &'t [Token<'a>], current: usize) -> Self {
        Self { tokens, current }
    }
}

impl<'a> TokenSource<'a> for Cursor<'_, 'a> {
    fn peek(&mut self) -> LexResult<Option<Token<'a>>> {
        Ok(self.tokens.get(self.current).copied())
    }

    fn bump(&mut self) {
        self.current += 1;
    }

    fn offset(&self) -> usize {
        self.current
    }

    fn last_span(&self) -> Span {
        let before = &self.tokens[..self.current.min(self.tokens.len())];
        before.last().map_or(Span::point(0), |tk| tk.span)
    }
}

/// Pulls tokens lazily from a lexer, keeping one token of lookahead.
pub struct Stream<'a> {
    lexer:     Lexer<'a>,
    lookahead: Option<Token<'a>>,
    consumed:  usize,
    last:      Span,
}

impl<'a> Stream<'a> {
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            lookahead: None,
            consumed: 0,
            last: Span::point(0),
        }
    }
}

impl<'a> TokenSource<'a> for Stream<'a> {
    fn peek(&mut self) -> LexResult<Option<Token<'a>>> {
        if self.lookahead.is_none() {
            self.lookahead = self.lexer.next_token().transpose()?;
        }
        Ok(self.lookahead)
    }

    fn bump(&mut self) {
        if let Some(token) = self.lookahead.take() {
            self.last = token.span;
            self.consumed += 1;
        }
    }

    fn offset(&self) -> usize {
        self.consumed
    }

    fn last_span(&self) -> Span {
        self.last
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::LexErrorKind;
    use crate::token::TokenKind;

    #[test]
    fn cursor_walks_the_slice() {
        let tokens = Lexer::new("1 + 2").lex_all().unwrap();
        let mut cursor = Cursor::at(&tokens, 1);
        assert_eq!(cursor.last_span(), Span::new(0, 1));
        assert_eq!(cursor.peek().unwrap().map(|tk| tk.kind), Some(TokenKind::Plus));
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.peek().unwrap(), None);
        assert_eq!(cursor.last_span(), Span::new(4, 5));

        assert_eq!(Cursor::new(&tokens).last_span(), Span::point(0));
        assert_eq!(Cursor::at(&tokens, 10).last_span(), Span::new(4, 5));
    }

    #[test]
    fn stream_pulls_on_demand() {
        let mut stream = Stream::new(Lexer::new("7 ` 8"));
        let first = stream.peek().unwrap().unwrap();
        assert_eq!(first.kind, TokenKind::Integer);
        // peeking twice does not advance
        assert_eq!(stream.peek().unwrap(), Some(first));
        stream.bump();
        assert_eq!(stream.offset(), 1);
        assert_eq!(stream.last_span(), Span::new(0, 1));

        let err = stream.peek().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('`'));
    }
}
