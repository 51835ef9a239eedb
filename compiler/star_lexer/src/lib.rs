//! Lexer for star using logos with string interning.
//!
//! [`lex`] always produces a token list ending in [`TokenKind::Eof`];
//! unrecognized input becomes [`TokenKind::Error`]. [`lex_with_errors`]
//! additionally reports what went wrong for each error token.

mod escape;
mod raw_token;

use logos::Logos;
use star_diagnostic::{Diagnostic, ErrorCode};
use star_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use raw_token::RawToken;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing quote.
    UnterminatedString,
    /// Input no token rule accepts.
    InvalidCharacter(char),
}

/// A lexer error, located by span.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            LexErrorKind::UnterminatedString => Diagnostic::error(ErrorCode::E0001)
                .with_message("unterminated string literal")
                .with_label(self.span, "missing closing quote")
                .with_note("string literals cannot span lines"),
            LexErrorKind::InvalidCharacter(c) => Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("invalid character `{}`", c.escape_default()))
                .with_label(self.span, "not valid here"),
        }
    }
}

/// Tokens plus any errors found while producing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    lex_with_errors(source, interner).tokens
}

/// Lex source code, keeping a [`LexError`] for every error token.
pub fn lex_with_errors(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::UnterminatedString) => {
                output.errors.push(LexError {
                    span,
                    kind: LexErrorKind::UnterminatedString,
                });
                TokenKind::Error
            }
            Ok(raw) => convert_token(raw, slice, interner),
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\0');
                output.errors.push(LexError {
                    span,
                    kind: LexErrorKind::InvalidCharacter(c),
                });
                TokenKind::Error
            }
        };
        output.tokens.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    output
        .tokens
        .push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    output
}

/// Convert a raw token to a `TokenKind`, interning strings.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Number(n) | RawToken::HexNumber(n) => TokenKind::Number(n),
        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            TokenKind::Str(interner.intern(&escape::unescape_string(body)))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Let => TokenKind::Let,
        RawToken::Return => TokenKind::Return,
        RawToken::Throw => TokenKind::Throw,
        RawToken::Break => TokenKind::Break,
        RawToken::Switch => TokenKind::Switch,
        RawToken::Case => TokenKind::Case,
        RawToken::Default => TokenKind::Default,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,
        RawToken::Undefined => TokenKind::Undefined,
        RawToken::Typeof => TokenKind::Typeof,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,

        RawToken::Star => TokenKind::Star,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::EqEqEq => TokenKind::EqEqEq,
        RawToken::NotEqEq => TokenKind::NotEqEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,

        // Filtered out by `lex_with_errors` before conversion.
        RawToken::LineComment | RawToken::UnterminatedString => TokenKind::Error,
    }
}
