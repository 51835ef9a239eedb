//! Recursive descent parser for star.
//!
//! Produces a [`Program`] of statements over a flat [`ExprArena`]. Inside
//! `case (...)` slots array and object literals are parsed with the
//! destructuring cover grammar (shorthand initializers such as `{a = 1}`
//! are accepted there); whether a slot is a pattern or an expression is
//! decided later by `star_patterns`.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use star_diagnostic::Diagnostic;
use star_ir::{ExprArena, Program, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

/// Output of [`parse`]. Always contains a program; errors are collected
/// rather than aborting at the first one.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
    /// Non-zero while parsing a `case (...)` slot.
    pattern_depth: u32,
    next_switch_id: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            errors: Vec::new(),
            pattern_depth: 0,
            next_switch_id: 0,
        }
    }

    pub fn parse_program(mut self) -> ParseOutput {
        let stmts = self.parse_stmt_list(false);
        debug!(
            stmts = stmts.len(),
            switches = self.next_switch_id,
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            program: Program {
                stmts,
                switch_count: self.next_switch_id,
            },
            arena: self.arena,
            errors: self.errors,
        }
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    fn in_pattern(&self) -> bool {
        self.pattern_depth > 0
    }

    /// Record a recoverable error and keep parsing.
    fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Consume `kind` or fail with "expected X, found Y".
    fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume a closing delimiter. At EOF the error points back at the
    /// opening delimiter.
    fn expect_closing(
        &mut self,
        close: &TokenKind,
        open: char,
        open_span: Span,
    ) -> Result<Span, ParseError> {
        if self.check(close) {
            return Ok(self.advance().span);
        }
        if self.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedDelimiter { open, open_span },
                self.current_span(),
            ));
        }
        Err(self.unexpected(close.display_name()))
    }

    /// `;` is required, except directly before `}` or end of input.
    fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("`;`")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.current_kind().display_name(),
            },
            self.current_span(),
        )
    }
}

/// Parse tokens into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}
