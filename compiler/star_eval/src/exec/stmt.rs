use star_ir::{Block, Stmt, StmtKind};
use star_patterns::errors::thrown;
use star_patterns::{EvalError, Value};
use star_stack::ensure_sufficient_stack;

use super::Completion;
use crate::{Interpreter, Mutability};

impl Interpreter<'_> {
    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Completion, EvalError> {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Let { name, init } => {
                let value = self.eval_expr(*init)?;
                self.env.define(*name, value, Mutability::Mutable);
                Ok(Completion::Normal)
            }
            StmtKind::Expr(expr) => {
                self.eval_expr(*expr)?;
                Ok(Completion::Normal)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(*expr)?,
                    None => Value::Undefined,
                };
                Ok(Completion::Return(value))
            }
            StmtKind::Throw(expr) => {
                let value = self.eval_expr(*expr)?;
                Err(thrown(value).with_span(stmt.span))
            }
            StmtKind::Break => Ok(Completion::Break),
            StmtKind::Block(block) => self.exec_block(block),
            StmtKind::SwitchStar(switch) => self.dispatch(switch),
        })
    }

    /// Run statements in the current scope, stopping at the first abrupt
    /// completion.
    pub(crate) fn exec_stmts(&mut self, stmts: &[Stmt]) -> Result<Completion, EvalError> {
        for stmt in stmts {
            let completion = self.exec_stmt(stmt)?;
            if !completion.is_normal() {
                return Ok(completion);
            }
        }
        Ok(Completion::Normal)
    }

    /// Run a block in a fresh scope.
    pub(crate) fn exec_block(&mut self, block: &Block) -> Result<Completion, EvalError> {
        self.env.push_scope();
        let result = self.exec_stmts(&block.stmts);
        self.env.pop_scope();
        result
    }
}
