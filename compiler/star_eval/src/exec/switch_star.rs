//! The `switch*` dispatcher.

use star_ir::SwitchStar;
use star_patterns::{select_clause, Comparator, EvalError, EvalNote};
use tracing::debug;

use super::Completion;
use crate::Interpreter;

impl Interpreter<'_> {
    /// Evaluate the subject, pick the first matching clause, and run its
    /// body in a new scope holding the pattern's bindings.
    ///
    /// No match and no `default` completes normally. The body's completion
    /// propagates, except a `break`, which ends the `switch*`.
    #[tracing::instrument(level = "debug", skip_all, fields(id = switch.id.index()))]
    pub fn dispatch(&mut self, switch: &SwitchStar) -> Result<Completion, EvalError> {
        let switches = self.switches;
        let Some(compiled) = switches.get(switch.id) else {
            return Err(EvalError::new("`switch*` site was not compiled").with_span(switch.span));
        };

        let subject = self.eval_expr(switch.subject)?;
        let default = self.default_comparator.clone();
        let comparator = Comparator::for_site(compiled, &default, self)?;

        let Some(selected) = select_clause(compiled, &subject, &comparator, self)? else {
            return Ok(Completion::Normal);
        };
        let Some(clause) = switch.clauses.get(selected.clause_index) else {
            return Err(EvalError::new("selected clause is out of range").with_span(switch.span));
        };
        debug!(
            clause = selected.clause_index,
            bindings = selected.bindings.len(),
            "executing clause"
        );

        self.env.push_bindings(selected.bindings);
        let result = self.exec_stmts(&clause.body.stmts);
        self.env.pop_scope();

        match result {
            Ok(Completion::Break) => Ok(Completion::Normal),
            Ok(completion) => Ok(completion),
            Err(error) => Err(error.with_note(EvalNote::with_span(
                format!("in clause {} of this `switch*`", selected.clause_index + 1),
                clause.head_span,
            ))),
        }
    }
}
