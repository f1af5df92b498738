use crate::token::TokenKind;

/// Fixed mapping from reserved words to their token kind.
#[derive(Debug)]
pub struct Keywords {
    entries: &'static [(&'static str, TokenKind)],
}

impl Keywords {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, TokenKind)]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        self.entries
            .iter()
            .find(|(kw, _)| *kw == word)
            .map(|&(_, kind)| kind)
    }
}

/// Only the all-lowercase and all-uppercase spellings are reserved.
pub static KEYWORDS: Keywords = Keywords::new(&[
    ("if", TokenKind::If),
    ("IF", TokenKind::If),
    ("else", TokenKind::Else),
    ("ELSE", TokenKind::Else),
    ("while", TokenKind::While),
    ("WHILE", TokenKind::While),
    ("for", TokenKind::For),
    ("FOR", TokenKind::For),
    ("call", TokenKind::Call),
    ("CALL", TokenKind::Call),
    ("channel", TokenKind::Channel),
    ("CHANNEL", TokenKind::Channel),
    ("var", TokenKind::Var),
    ("VAR", TokenKind::Var),
]);

/// What the tokenizer does with an alphabetic run that is not a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordPolicy {
    /// Emit a [`TokenKind::Symbol`].
    #[default]
    Symbol,
    /// Legacy behaviour: fail with an unknown-keyword error. Kept only so
    /// older sources can be checked against it.
    Reject,
}

#[derive(Debug, Clone, Copy)]
pub struct LexConfig {
    pub keywords: &'static Keywords,
    pub words:    WordPolicy,
}

impl LexConfig {
    pub const DEFAULT: Self = Self {
        keywords: &KEYWORDS,
        words:    WordPolicy::Symbol,
    };

    pub const STRICT: Self = Self {
        keywords: &KEYWORDS,
        words:    WordPolicy::Reject,
    };
}

impl Default for LexConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn both_spellings_are_reserved() {
        let words = [
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("for", TokenKind::For),
            ("call", TokenKind::Call),
            ("channel", TokenKind::Channel),
            ("var", TokenKind::Var),
        ];
        for (word, kind) in words {
            assert_eq!(KEYWORDS.lookup(word), Some(kind));
            assert_eq!(KEYWORDS.lookup(&word.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn mixed_case_is_not_reserved() {
        assert_eq!(KEYWORDS.lookup("If"), None);
        assert_eq!(KEYWORDS.lookup("Channel"), None);
        assert_eq!(KEYWORDS.lookup("return"), None);
    }
}
