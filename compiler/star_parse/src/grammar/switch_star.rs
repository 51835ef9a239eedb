//! `switch*` statements.
//!
//! ```text
//! switch* ( subject [ ; comparator ] ) { clause* }
//! clause  := "case" "(" slot ("," slot)* ")" body | "default" body
//! slot    := "is" expr | expr        ; expr read with the cover grammar
//! body    := block | statement
//! ```
//!
//! Clause ordering rules (a single trailing `default`) are checked by the
//! pattern compiler, not here, so all mistakes in one switch are reported
//! together.

use star_ir::{
    Block, CaseClause, ClauseKind, PatternSlot, SlotKind, Span, SwitchId, SwitchStar, TokenKind,
};
use tracing::trace;

use crate::recovery::synchronize_clause;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_switch_star(&mut self) -> Result<SwitchStar, ParseError> {
        let start = self.advance().span;
        if !self.check(&TokenKind::Star) {
            return Err(ParseError::new(
                ParseErrorKind::SwitchWithoutStar,
                self.current_span(),
            ));
        }
        self.advance();

        let id = SwitchId::new(self.next_switch_id);
        self.next_switch_id += 1;

        let open = self.expect(&TokenKind::LParen)?;
        let subject = self.parse_expr()?;
        let comparator = if self.check(&TokenKind::Semicolon) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_closing(&TokenKind::RParen, '(', open)?;

        let body_open = self.expect(&TokenKind::LBrace)?;
        let mut clauses = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            match self.parse_clause() {
                Ok(clause) => clauses.push(clause),
                Err(error) => {
                    let before = self.cursor.position();
                    self.report(error);
                    synchronize_clause(&mut self.cursor);
                    if self.cursor.position() == before
                        && !self.check(&TokenKind::RBrace)
                        && !self.is_at_end()
                    {
                        self.advance();
                    }
                }
            }
        }
        let close = self.expect_closing(&TokenKind::RBrace, '{', body_open)?;

        trace!(switch = id.index(), clauses = clauses.len(), "parsed switch*");
        Ok(SwitchStar {
            id,
            subject,
            comparator,
            clauses,
            span: start.merge(close),
        })
    }

    fn parse_clause(&mut self) -> Result<CaseClause, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Default => {
                self.advance();
                ClauseKind::Default
            }
            TokenKind::Case => {
                self.advance();
                let open = self.expect(&TokenKind::LParen)?;
                let slots = self.parse_pattern_list(open)?;
                self.expect_closing(&TokenKind::RParen, '(', open)?;
                ClauseKind::Case(slots)
            }
            _ => return Err(self.unexpected("`case` or `default`")),
        };
        let head_span = start.merge(self.previous_span());
        let body = self.parse_clause_body()?;
        Ok(CaseClause {
            kind,
            body,
            head_span,
        })
    }

    fn parse_pattern_list(&mut self, open: Span) -> Result<Vec<PatternSlot>, ParseError> {
        if self.check(&TokenKind::RParen) {
            self.report(ParseError::new(
                ParseErrorKind::EmptyPatternList,
                open.merge(self.current_span()),
            ));
            return Ok(Vec::new());
        }

        let mut slots = Vec::new();
        loop {
            slots.push(self.parse_pattern_slot()?);
            if !self.check(&TokenKind::Comma) {
                return Ok(slots);
            }
            self.advance();
            if self.check(&TokenKind::RParen) {
                return Ok(slots);
            }
        }
    }

    fn parse_pattern_slot(&mut self) -> Result<PatternSlot, ParseError> {
        let start = self.current_span();
        if self.at_predicate_start() {
            self.advance();
            let expr = self.parse_assignment()?;
            return Ok(PatternSlot {
                kind: SlotKind::Predicate(expr),
                span: start.merge(self.arena.span(expr)),
            });
        }

        self.pattern_depth += 1;
        let expr = self.parse_assignment();
        self.pattern_depth -= 1;
        let expr = expr?;
        Ok(PatternSlot {
            kind: SlotKind::Expr(expr),
            span: self.arena.span(expr),
        })
    }

    /// `is` starts a predicate when an operand follows directly, so a
    /// variable named `is` can still be matched as a literal. `is (f)` is
    /// a predicate, never a call of `is`.
    fn at_predicate_start(&self) -> bool {
        self.cursor.check_contextual("is")
            && matches!(
                self.cursor.peek_next_kind(),
                TokenKind::LParen
                    | TokenKind::Bang
                    | TokenKind::Typeof
                    | TokenKind::Ident(_)
                    | TokenKind::Number(_)
                    | TokenKind::Str(_)
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::Null
                    | TokenKind::Undefined
                    | TokenKind::LBracket
                    | TokenKind::LBrace
            )
    }

    /// A clause body is a block or a single statement.
    fn parse_clause_body(&mut self) -> Result<Block, ParseError> {
        if self.check(&TokenKind::LBrace) {
            return self.parse_block();
        }
        let stmt = self.parse_stmt()?;
        let span = stmt.span;
        Ok(Block {
            stmts: vec![stmt],
            span,
        })
    }
}
