use std::error::Error;
use std::fmt::Display;
use std::ops::Range;

/// Half-open byte range into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    lo: u32,
    hi: u32,
}

impl Span {
    #[must_use]
    #[inline]
    pub const fn new(lo: u32, hi: u32) -> Self {
        if hi < lo {
            Self { lo: hi, hi: lo }
        } else {
            Self { lo, hi }
        }
    }

    /// Zero-width span sitting at `at`.
    #[must_use]
    #[inline]
    pub const fn point(at: u32) -> Self {
        Self { lo: at, hi: at }
    }

    #[must_use]
    #[inline]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    #[must_use]
    #[inline]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Line and column of both ends of the span, or `None` if the span does
    /// not fall on character boundaries of `src`.
    #[must_use]
    pub fn decode(self, src: &str) -> Option<(Loc, Loc)> {
        let lo = Loc::at(src, self.lo as usize)?;
        let hi = Loc::at(src, self.hi as usize)?;
        Some((lo, hi))
    }
}

impl From<Span> for Range<usize> {
    fn from(value: Span) -> Self {
        value.lo as usize..value.hi as usize
    }
}

/// 1-based line and column, columns counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loc {
    pub line:   u32,
    pub column: u32,
}

impl Loc {
    #[must_use]
    pub fn at(src: &str, byte: usize) -> Option<Self> {
        if !src.is_char_boundary(byte) {
            return None;
        }
        Some(LocIter::new(src).take_while(|(at, _)| *at < byte).fold(
            Self { line: 1, column: 1 },
            |_, (_, next)| next,
        ))
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Walks `src` yielding, for each character, its byte offset and the
/// location of the character that follows it.
pub struct LocIter<'a> {
    chars: std::str::CharIndices<'a>,
    loc:   Loc,
}

impl<'a> LocIter<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.char_indices(),
            loc:   Loc { line: 1, column: 1 },
        }
    }
}

impl Iterator for LocIter<'_> {
    type Item = (usize, Loc);

    fn next(&mut self) -> Option<Self::Item> {
        let (at, c) = self.chars.next()?;
        if c == '\n' {
            self.loc.line += 1;
            self.loc.column = 1;
        } else {
            self.loc.column += 1;
        }
        Some((at, self.loc))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spand<T> {
    pub kind: T,
    pub span: Span,
}

impl<T: Display> Display for Spand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.kind(), f)
    }
}

impl<T: Error> Error for Spand<T> {}

impl<T> Spand<T> {
    #[inline]
    pub const fn new(kind: T, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub const fn kind(&self) -> &T {
        &self.kind
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn span_normalizes_bounds() {
        let span = Span::new(7, 3);
        assert_eq!((span.lo(), span.hi()), (3, 7));
        assert_eq!(Range::from(span), 3..7);
        assert_eq!(Range::from(Span::point(5)), 5..5);
    }

    #[test]
    fn decode_lines_and_columns() {
        let src = "1 + 2\n3 * x";
        let (lo, hi) = Span::new(10, 11).decode(src).unwrap();
        assert_eq!(lo, Loc { line: 2, column: 5 });
        assert_eq!(hi, Loc { line: 2, column: 6 });

        let (lo, _) = Span::point(0).decode(src).unwrap();
        assert_eq!(lo.to_string(), "1:1");
    }

    #[test]
    fn decode_end_of_input() {
        let src = "12;";
        let (lo, hi) = Span::point(3).decode(src).unwrap();
        assert_eq!(lo, hi);
        assert_eq!(lo, Loc { line: 1, column: 4 });
        assert_eq!(Span::point(4).decode(src), None);
    }
}
