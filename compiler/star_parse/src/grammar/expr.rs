//! Expressions, by precedence climbing.
//!
//! ```text
//! assignment  := binary ("=" assignment)?
//! binary      := unary (op unary)*     ; ||  &&  == != === !==  < <= > >=  + -  * / %
//! unary       := ("!" | "-" | "typeof") unary | postfix
//! postfix     := primary ("(" args ")" | "." name | "[" expr "]")*
//! ```

use star_ir::{BinaryOp, ExprId, ExprKind, TokenKind, UnaryOp};
use star_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// Binary operator and binding power for a token, if it is one.
fn binary_op(kind: TokenKind) -> Option<(BinaryOp, u8)> {
    Some(match kind {
        TokenKind::OrOr => (BinaryOp::Or, 1),
        TokenKind::AndAnd => (BinaryOp::And, 2),
        TokenKind::EqEq => (BinaryOp::Eq, 3),
        TokenKind::NotEq => (BinaryOp::NotEq, 3),
        TokenKind::EqEqEq => (BinaryOp::StrictEq, 3),
        TokenKind::NotEqEq => (BinaryOp::StrictNotEq, 3),
        TokenKind::Lt => (BinaryOp::Lt, 4),
        TokenKind::LtEq => (BinaryOp::LtEq, 4),
        TokenKind::Gt => (BinaryOp::Gt, 4),
        TokenKind::GtEq => (BinaryOp::GtEq, 4),
        TokenKind::Plus => (BinaryOp::Add, 5),
        TokenKind::Minus => (BinaryOp::Sub, 5),
        TokenKind::Star => (BinaryOp::Mul, 6),
        TokenKind::Slash => (BinaryOp::Div, 6),
        TokenKind::Percent => (BinaryOp::Mod, 6),
        _ => return None,
    })
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.parse_assignment()
    }

    pub(crate) fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment_inner())
    }

    fn parse_assignment_inner(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_binary(1)?;
        if !self.check(&TokenKind::Eq) {
            return Ok(target);
        }
        self.advance();
        let value = self.parse_assignment()?;

        // Values are immutable, so only variables can be reassigned. Other
        // targets are only meaningful as destructuring defaults inside a
        // pattern slot.
        let simple = matches!(self.arena.kind(target), ExprKind::Ident(_));
        if !simple && !self.in_pattern() {
            self.report(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                self.arena.span(target),
            ));
        }

        let span = self.arena.span(target).merge(self.arena.span(value));
        Ok(self.arena.alloc(ExprKind::Assign { target, value }, span))
    }

    fn parse_binary(&mut self, min_power: u8) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let Some((op, power)) = binary_op(self.current_kind()) else {
                return Ok(left);
            };
            if power < min_power {
                return Ok(left);
            }
            self.advance();
            let right = ensure_sufficient_stack(|| self.parse_binary(power + 1))?;
            let span = self.arena.span(left).merge(self.arena.span(right));
            left = self.arena.alloc(ExprKind::Binary { op, left, right }, span);
        }
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Typeof => UnaryOp::Typeof,
            _ => return self.parse_postfix(),
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.arena.span(operand));
        Ok(self.arena.alloc(ExprKind::Unary { op, operand }, span))
    }

    fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            let start = self.arena.span(expr);
            match self.current_kind() {
                TokenKind::LParen => {
                    let open = self.advance().span;
                    let mut args = Vec::new();
                    while !self.check(&TokenKind::RParen) && !self.is_at_end() {
                        args.push(self.parse_assignment()?);
                        if !self.check(&TokenKind::Comma) {
                            break;
                        }
                        self.advance();
                    }
                    let close = self.expect_closing(&TokenKind::RParen, '(', open)?;
                    expr = self.arena.alloc(
                        ExprKind::Call { callee: expr, args },
                        start.merge(close),
                    );
                }
                TokenKind::Dot => {
                    self.advance();
                    let property = self.parse_property_name()?;
                    expr = self.arena.alloc(
                        ExprKind::Member {
                            object: expr,
                            property,
                        },
                        start.merge(self.previous_span()),
                    );
                }
                TokenKind::LBracket => {
                    let open = self.advance().span;
                    let index = self.parse_expr()?;
                    let close = self.expect_closing(&TokenKind::RBracket, '[', open)?;
                    expr = self.arena.alloc(
                        ExprKind::Index {
                            object: expr,
                            index,
                        },
                        start.merge(close),
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Name after `.`: an identifier or a keyword used as a property name.
    fn parse_property_name(&mut self) -> Result<star_ir::Name, ParseError> {
        let kind = self.current_kind();
        let name = match kind {
            TokenKind::Ident(name) => name,
            _ => match kind.keyword_text() {
                Some(text) => self.cursor.interner().intern(text),
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedIdent {
                            found: kind.display_name(),
                        },
                        self.current_span(),
                    )
                    .with_context("expected a property name after `.`"))
                }
            },
        };
        self.advance();
        Ok(name)
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Number(n) => ExprKind::Number(n),
            TokenKind::Str(name) => ExprKind::Str(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Null => ExprKind::Null,
            TokenKind::Undefined => ExprKind::Undefined,
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let close = self.expect_closing(&TokenKind::RParen, '(', span)?;
                return Ok(self.arena.alloc(ExprKind::Paren(inner), span.merge(close)));
            }
            TokenKind::LBracket => return self.parse_array_literal(),
            TokenKind::LBrace => return self.parse_object_literal(),
            TokenKind::Error => {
                return Err(ParseError::new(ParseErrorKind::InvalidToken, span));
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression {
                        found: other.display_name(),
                    },
                    span,
                ));
            }
        };
        self.advance();
        Ok(self.arena.alloc(kind, span))
    }
}
