//! The logos-derived tokenizer output, before string interning and
//! conversion to [`star_ir::TokenKind`].

use logos::Logos;

/// Parse a decimal number literal. Logos turns `None` into an error token.
fn parse_decimal(slice: &str) -> Option<f64> {
    slice.parse().ok()
}

fn parse_hex(slice: &str) -> Option<f64> {
    u64::from_str_radix(&slice[2..], 16).ok().map(|n| n as f64)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("let")]
    Let,
    #[token("return")]
    Return,
    #[token("throw")]
    Throw,
    #[token("break")]
    Break,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("undefined")]
    Undefined,
    #[token("typeof")]
    Typeof,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,

    // Operators
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| parse_decimal(lex.slice()))]
    Number(f64),

    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_hex(lex.slice()))]
    HexNumber(f64),

    // No unescaped newlines in either quote style.
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    #[regex(r"'([^'\\\n\r]|\\.)*'")]
    String,

    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    #[regex(r"'([^'\\\n\r]|\\.)*")]
    UnterminatedString,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,
}
