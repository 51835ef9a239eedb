//! Statements and blocks.

use star_ir::{Block, Stmt, StmtKind, TokenKind};
use star_stack::ensure_sufficient_stack;

use crate::recovery::synchronize;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse statements until EOF, or until `}` when `in_block`.
    ///
    /// Failed statements are reported and skipped.
    pub(crate) fn parse_stmt_list(&mut self, in_block: bool) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        loop {
            if self.is_at_end() || (in_block && self.check(&TokenKind::RBrace)) {
                return stmts;
            }
            let before = self.cursor.position();
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    self.report(error);
                    synchronize(&mut self.cursor);
                    if self.cursor.position() == before {
                        self.advance();
                    }
                }
            }
        }
    }

    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Let => self.parse_let()?,
            TokenKind::Return => {
                self.advance();
                let value = match self.current_kind() {
                    TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
                    _ => Some(self.parse_expr()?),
                };
                self.expect_semicolon()?;
                StmtKind::Return(value)
            }
            TokenKind::Throw => {
                self.advance();
                let value = self.parse_expr()?;
                self.expect_semicolon()?;
                StmtKind::Throw(value)
            }
            TokenKind::Break => {
                self.advance();
                self.expect_semicolon()?;
                StmtKind::Break
            }
            TokenKind::Switch => StmtKind::SwitchStar(self.parse_switch_star()?),
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            _ => {
                let expr = self.parse_expr()?;
                self.expect_semicolon()?;
                StmtKind::Expr(expr)
            }
        };
        Ok(Stmt {
            kind,
            span: start.merge(self.previous_span()),
        })
    }

    /// `let name = init;`
    fn parse_let(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let TokenKind::Ident(name) = self.current_kind() else {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedIdent {
                    found: self.current_kind().display_name(),
                },
                self.current_span(),
            )
            .with_context("expected a variable name after `let`"));
        };
        self.advance();
        self.expect(&TokenKind::Eq)?;
        let init = self.parse_expr()?;
        self.expect_semicolon()?;
        Ok(StmtKind::Let { name, init })
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(&TokenKind::LBrace)?;
        let stmts = self.parse_stmt_list(true);
        let close = self.expect_closing(&TokenKind::RBrace, '{', open)?;
        Ok(Block {
            stmts,
            span: open.merge(close),
        })
    }
}
