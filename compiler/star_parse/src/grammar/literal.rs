//! Array and object literals.
//!
//! Both are parsed with the destructuring cover grammar: the same nodes
//! serve as expressions and as pattern candidates in `case (...)` slots.

use star_ir::{format_number, ArrayElement, ExprId, ExprKind, ObjectMember, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `[ elem, , ...rest ]`
    pub(crate) fn parse_array_literal(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let mut elements = Vec::new();

        loop {
            match self.current_kind() {
                TokenKind::RBracket | TokenKind::Eof => break,
                TokenKind::Comma => {
                    elements.push(ArrayElement::Hole(self.advance().span));
                    continue;
                }
                TokenKind::Ellipsis => {
                    let start = self.advance().span;
                    let expr = self.parse_assignment()?;
                    elements.push(ArrayElement::Spread {
                        expr,
                        span: start.merge(self.arena.span(expr)),
                    });
                }
                _ => elements.push(ArrayElement::Expr(self.parse_assignment()?)),
            }
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        let close = self.expect_closing(&TokenKind::RBracket, '[', open)?;
        Ok(self
            .arena
            .alloc(ExprKind::Array(elements), open.merge(close)))
    }

    /// `{ key: value, shorthand, key = default, ...rest }`
    pub(crate) fn parse_object_literal(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let mut members = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            members.push(self.parse_object_member()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        let close = self.expect_closing(&TokenKind::RBrace, '{', open)?;
        Ok(self
            .arena
            .alloc(ExprKind::Object(members), open.merge(close)))
    }

    fn parse_object_member(&mut self) -> Result<ObjectMember, ParseError> {
        if self.check(&TokenKind::Ellipsis) {
            let start = self.advance().span;
            let expr = self.parse_assignment()?;
            return Ok(ObjectMember::Spread {
                expr,
                span: start.merge(self.arena.span(expr)),
            });
        }

        let key_span = self.current_span();
        let interner = self.cursor.interner();
        let (key, is_ident) = match self.current_kind() {
            TokenKind::Ident(name) => (name, true),
            TokenKind::Str(name) => (name, false),
            TokenKind::Number(n) => (interner.intern(&format_number(n)), false),
            other => match other.keyword_text() {
                Some(text) => (interner.intern(text), false),
                None => return Err(self.unexpected("property name")),
            },
        };
        self.advance();

        match self.current_kind() {
            TokenKind::Colon => {
                self.advance();
                let value = self.parse_assignment()?;
                Ok(ObjectMember::Property {
                    key,
                    key_span,
                    value,
                    shorthand: false,
                })
            }
            TokenKind::Eq if is_ident => {
                self.advance();
                let default = self.parse_assignment()?;
                if !self.in_pattern() {
                    self.report(ParseError::new(
                        ParseErrorKind::ShorthandInitOutsidePattern,
                        key_span.merge(self.arena.span(default)),
                    ));
                }
                Ok(ObjectMember::ShorthandInit {
                    key,
                    key_span,
                    default,
                })
            }
            _ if is_ident => {
                let value = self.arena.alloc(ExprKind::Ident(key), key_span);
                Ok(ObjectMember::Property {
                    key,
                    key_span,
                    value,
                    shorthand: true,
                })
            }
            _ => Err(self.unexpected("`:`")),
        }
    }
}
