//! Pattern compilation.
//!
//! Every `switch*` site is compiled once, before the program runs, into an
//! immutable [`CompiledSwitch`]: one [`CompiledClause`] per source clause,
//! in source order, each holding its matchers and declared binding names.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use star_diagnostic::Diagnostic;
use star_ir::{
    ClauseKind, ExprArena, ExprId, Name, Program, Span, StringInterner, SwitchId, SwitchStar,
};
use tracing::debug;

use crate::classify::{classify_slot, Pattern};
use crate::lint;
use crate::pattern_error::{PatternError, PatternErrorKind};
use crate::shape::Shape;

/// Executable form of one pattern slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Matcher {
    /// `comparator(value_of(expr), subject)`. `memo` indexes the
    /// per-dispatch cache so `expr` is evaluated at most once.
    Literal { expr: ExprId, memo: usize, span: Span },
    /// `value_of(expr)(subject)`, with the same caching as `Literal`.
    Predicate { expr: ExprId, memo: usize, span: Span },
    Destructure(Shape),
    /// Always matches.
    Default,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledClause {
    pub matchers: Vec<Matcher>,
    /// Names bound when this clause matches (empty unless destructuring).
    pub bindings: Vec<Name>,
    pub head_span: Span,
}

impl CompiledClause {
    pub fn is_default(&self) -> bool {
        matches!(self.matchers.as_slice(), [Matcher::Default])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledSwitch {
    pub id: SwitchId,
    pub subject: ExprId,
    /// Per-site comparator expression, evaluated once per dispatch.
    pub comparator: Option<ExprId>,
    pub clauses: Vec<CompiledClause>,
    /// Number of cached literal/predicate values per dispatch.
    pub memo_slots: usize,
    pub span: Span,
}

/// Compile one site, collecting every error rather than stopping at the
/// first.
#[tracing::instrument(level = "debug", skip_all, fields(id = switch.id.index()))]
pub fn compile_switch(
    switch: &SwitchStar,
    arena: &ExprArena,
    interner: &StringInterner,
) -> Result<CompiledSwitch, Vec<PatternError>> {
    let mut errors = Vec::new();
    let mut clauses = Vec::with_capacity(switch.clauses.len());
    let mut memo_slots = 0;
    let last_index = switch.clauses.len().saturating_sub(1);

    for (index, clause) in switch.clauses.iter().enumerate() {
        let slots = match &clause.kind {
            ClauseKind::Default => {
                if index != last_index {
                    let last_clause = switch
                        .clauses
                        .last()
                        .map_or(clause.head_span, |c| c.head_span);
                    errors.push(PatternError::new(
                        PatternErrorKind::MisplacedDefault { last_clause },
                        clause.head_span,
                    ));
                }
                clauses.push(CompiledClause {
                    matchers: vec![Matcher::Default],
                    bindings: Vec::new(),
                    head_span: clause.head_span,
                });
                continue;
            }
            ClauseKind::Case(slots) => slots,
        };

        let mut matchers = Vec::with_capacity(slots.len());
        let mut bindings = Vec::new();
        let mut mixed_reported = false;
        for slot in slots {
            let pattern = match classify_slot(arena, interner, slot) {
                Ok(pattern) => pattern,
                Err(error) => {
                    errors.push(error);
                    continue;
                }
            };
            match pattern {
                Pattern::Literal(expr) => {
                    matchers.push(Matcher::Literal {
                        expr,
                        memo: memo_slots,
                        span: slot.span,
                    });
                    memo_slots += 1;
                }
                Pattern::Predicate(expr) => {
                    matchers.push(Matcher::Predicate {
                        expr,
                        memo: memo_slots,
                        span: slot.span,
                    });
                    memo_slots += 1;
                }
                Pattern::Destructure(shape) => {
                    if slots.len() > 1 && !mixed_reported {
                        mixed_reported = true;
                        errors.push(PatternError::new(PatternErrorKind::MixedClause, slot.span));
                    }
                    check_unique_bindings(&shape, interner, &mut errors);
                    bindings.extend(shape.binding_names().into_iter().map(|(name, _)| name));
                    matchers.push(Matcher::Destructure(shape));
                }
            }
        }
        clauses.push(CompiledClause {
            matchers,
            bindings,
            head_span: clause.head_span,
        });
    }

    if !errors.is_empty() {
        debug!(errors = errors.len(), "switch* site failed to compile");
        return Err(errors);
    }
    Ok(CompiledSwitch {
        id: switch.id,
        subject: switch.subject,
        comparator: switch.comparator,
        clauses,
        memo_slots,
        span: switch.span,
    })
}

fn check_unique_bindings(shape: &Shape, interner: &StringInterner, errors: &mut Vec<PatternError>) {
    let mut first_seen: FxHashMap<Name, Span> = FxHashMap::default();
    for (name, span) in shape.binding_names() {
        match first_seen.get(&name) {
            Some(&first) => errors.push(PatternError::new(
                PatternErrorKind::DuplicateBinding {
                    name: interner.lookup(name).to_owned(),
                    first,
                },
                span,
            )),
            None => {
                first_seen.insert(name, span);
            }
        }
    }
}

/// All compiled sites of a program, indexed by [`SwitchId`], plus every
/// diagnostic produced while compiling them.
#[derive(Clone, Debug, Default)]
pub struct CompileOutput {
    switches: Vec<Option<Arc<CompiledSwitch>>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    /// The compiled site, or `None` if it failed to compile.
    pub fn get(&self, id: SwitchId) -> Option<&Arc<CompiledSwitch>> {
        self.switches.get(id.index()).and_then(Option::as_ref)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }
}

/// Compile every `switch*` site in `program` and run the unreachable
/// pattern lint on the ones that compiled.
#[tracing::instrument(level = "debug", skip_all, fields(switches = program.switch_count))]
pub fn compile_program(
    program: &Program,
    arena: &ExprArena,
    interner: &StringInterner,
) -> CompileOutput {
    let mut output = CompileOutput {
        switches: vec![None; program.switch_count as usize],
        diagnostics: Vec::new(),
    };

    program.for_each_switch(|site| match compile_switch(site, arena, interner) {
        Ok(compiled) => {
            output
                .diagnostics
                .extend(lint::unreachable_patterns(&compiled, arena));
            if let Some(slot) = output.switches.get_mut(site.id.index()) {
                *slot = Some(Arc::new(compiled));
            }
        }
        Err(errors) => output
            .diagnostics
            .extend(errors.iter().map(PatternError::to_diagnostic)),
    });

    let (errors, warnings) = star_diagnostic::count_by_severity(&output.diagnostics);
    debug!(errors, warnings, "compiled switch* sites");
    output
}
