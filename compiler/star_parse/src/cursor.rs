//! Token cursor for navigating the token stream.

use star_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over a lexed token list.
///
/// Invariant: the list ends in [`TokenKind::Eof`] and the cursor never
/// moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Used for progress tracking during error recovery.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.token_at(self.pos - 1).span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.token_at(self.pos + 1).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Compare discriminants only; payloads of literal tokens are ignored.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Is the current token the identifier `word`? Used for contextual
    /// keywords such as `is`.
    pub fn check_contextual(&self, word: &str) -> bool {
        match self.current_kind() {
            TokenKind::Ident(name) => self.interner.lookup(name) == word,
            _ => false,
        }
    }

    /// Advance to the next token and return the consumed one. Stays on EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Tokens past the end read as the final EOF.
    fn token_at(&self, index: usize) -> Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.get(self.tokens.len().saturating_sub(1)))
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }
}
