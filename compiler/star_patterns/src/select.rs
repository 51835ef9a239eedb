//! First-match clause selection.

use star_ir::ExprId;
use tracing::{debug, trace};

use crate::compile::{CompiledSwitch, Matcher};
use crate::errors::not_callable;
use crate::matcher::{match_shape, Bindings};
use crate::{Comparator, EvalError, EvalResult, PatternHost, Value};

/// The selected clause and the names its pattern bound.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub clause_index: usize,
    pub bindings: Bindings,
}

/// Try clauses in order, and patterns within a clause in order, stopping
/// at the first match. Returns `Ok(None)` when nothing matched and there is
/// no `default`.
///
/// Literal and predicate expressions are evaluated lazily, at most once per
/// call. Errors from evaluation, comparators, predicates, or the structural
/// matcher abort selection.
#[tracing::instrument(level = "debug", skip_all, fields(id = switch.id.index()))]
pub fn select_clause<H: PatternHost + ?Sized>(
    switch: &CompiledSwitch,
    subject: &Value,
    comparator: &Comparator,
    host: &mut H,
) -> Result<Option<MatchResult>, EvalError> {
    let mut memo: Vec<Option<Value>> = vec![None; switch.memo_slots];

    for (clause_index, clause) in switch.clauses.iter().enumerate() {
        for (pattern_index, matcher) in clause.matchers.iter().enumerate() {
            trace!(clause_index, pattern_index, "trying pattern");
            let bindings = match matcher {
                Matcher::Default => Some(Bindings::new()),
                Matcher::Literal { expr, memo: slot, span } => {
                    let candidate = memoized(&mut memo, *slot, *expr, host)?;
                    comparator
                        .matches(&candidate, subject, host, *span)
                        .map_err(|e| e.with_span(*span))?
                        .then(Bindings::new)
                }
                Matcher::Predicate { expr, memo: slot, span } => {
                    let predicate = memoized(&mut memo, *slot, *expr, host)?;
                    if !predicate.is_callable() {
                        return Err(not_callable(&predicate).with_span(*span));
                    }
                    host.call(&predicate, std::slice::from_ref(subject), *span)
                        .map_err(|e| e.with_span(*span))?
                        .is_truthy()
                        .then(Bindings::new)
                }
                Matcher::Destructure(shape) => match_shape(shape, subject, host)?,
            };

            if let Some(bindings) = bindings {
                debug!(clause_index, pattern_index, "clause selected");
                return Ok(Some(MatchResult {
                    clause_index,
                    bindings,
                }));
            }
        }
    }

    debug!("no clause matched");
    Ok(None)
}

fn memoized<H: PatternHost + ?Sized>(
    memo: &mut [Option<Value>],
    slot: usize,
    expr: ExprId,
    host: &mut H,
) -> EvalResult {
    if let Some(Some(value)) = memo.get(slot) {
        return Ok(value.clone());
    }
    let value = host.evaluate(expr)?;
    if let Some(entry) = memo.get_mut(slot) {
        *entry = Some(value.clone());
    }
    Ok(value)
}
