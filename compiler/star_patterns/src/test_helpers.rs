//! Fixtures shared by this crate's unit tests: parse a snippet, compile its
//! first `switch*`, and evaluate simple expressions without an interpreter.

use rustc_hash::FxHashMap;
use star_ir::{
    ArrayElement, ExprArena, ExprId, ExprKind, Name, ObjectMember, Span, StmtKind,
    StringInterner, SwitchStar, UnaryOp,
};
use star_parse::ParseOutput;

use crate::errors::{not_callable, undefined_variable};
use crate::{
    compile_switch, CompiledSwitch, EvalError, EvalResult, ObjectValue, PatternError, PatternHost,
    Value,
};

pub struct Parsed {
    pub output: ParseOutput,
    pub interner: StringInterner,
}

impl Parsed {
    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn first_switch(&self) -> &SwitchStar {
        let mut found = None;
        self.output.program.for_each_switch(|site| {
            if found.is_none() {
                found = Some(site);
            }
        });
        found.unwrap_or_else(|| panic!("no switch* in test source"))
    }

    /// The initializer of the first `let name = ...;`.
    pub fn let_init(&self, name: &str) -> ExprId {
        let name = self.name(name);
        self.output
            .program
            .stmts
            .iter()
            .find_map(|stmt| match stmt.kind {
                StmtKind::Let { name: n, init } if n == name => Some(init),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no `let` for {name:?}"))
    }
}

pub fn parse(source: &str) -> Parsed {
    let interner = StringInterner::new();
    let tokens = star_lexer::lex(source, &interner);
    let output = star_parse::parse(&tokens, &interner);
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.errors
    );
    Parsed { output, interner }
}

pub fn compile_first(parsed: &Parsed) -> CompiledSwitch {
    compile_switch(parsed.first_switch(), &parsed.output.arena, &parsed.interner)
        .unwrap_or_else(|errors| panic!("compile errors: {errors:?}"))
}

pub fn compile_errors(parsed: &Parsed) -> Vec<PatternError> {
    match compile_switch(parsed.first_switch(), &parsed.output.arena, &parsed.interner) {
        Ok(_) => panic!("expected compile errors"),
        Err(errors) => errors,
    }
}

/// Evaluates literals, variables, array/object literals, negation and
/// calls. Counts evaluations and records called function names.
pub struct TestHost<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    globals: FxHashMap<Name, Value>,
    pub evaluations: usize,
    pub calls: Vec<String>,
}

impl<'a> TestHost<'a> {
    pub fn new(parsed: &'a Parsed) -> Self {
        TestHost {
            arena: &parsed.output.arena,
            interner: &parsed.interner,
            globals: FxHashMap::default(),
            evaluations: 0,
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_global(mut self, name: &str, value: Value) -> Self {
        self.globals.insert(self.interner.intern(name), value);
        self
    }

    /// Evaluate without counting, for building subjects.
    pub fn value_of(&mut self, expr: ExprId) -> Value {
        self.eval(expr)
            .unwrap_or_else(|e| panic!("test expression failed: {e}"))
    }

    pub fn lookup(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    fn eval(&mut self, expr: ExprId) -> EvalResult {
        match self.arena.kind(expr) {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(*name))),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Undefined => Ok(Value::Undefined),
            ExprKind::Ident(name) => self
                .globals
                .get(name)
                .cloned()
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name))),
            ExprKind::Paren(inner) => self.eval(*inner),
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            } => Ok(Value::Number(-self.eval(*operand)?.to_number())),
            ExprKind::Array(elements) => {
                let mut items = Vec::new();
                for element in elements {
                    match element {
                        ArrayElement::Hole(_) => items.push(Value::Undefined),
                        ArrayElement::Expr(e) => items.push(self.eval(*e)?),
                        ArrayElement::Spread { .. } => return Err(EvalError::new("spread")),
                    }
                }
                Ok(Value::array(items))
            }
            ExprKind::Object(members) => {
                let mut object = ObjectValue::new();
                for member in members {
                    let ObjectMember::Property { key, value, .. } = member else {
                        return Err(EvalError::new("unsupported object member"));
                    };
                    object.insert(self.interner.lookup(*key), self.eval(*value)?);
                }
                Ok(Value::object(object))
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval(*callee)?;
                let args = args
                    .iter()
                    .map(|a| self.eval(*a))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call(&callee, &args, self.arena.span(expr))
            }
            _ => Err(EvalError::new("unsupported in test host")),
        }
    }
}

impl PatternHost for TestHost<'_> {
    fn evaluate(&mut self, expr: ExprId) -> EvalResult {
        self.evaluations += 1;
        self.eval(expr)
    }

    fn call(&mut self, callee: &Value, args: &[Value], span: Span) -> EvalResult {
        let Some(func) = callee.as_function() else {
            return Err(not_callable(callee).with_span(span));
        };
        self.calls.push(func.name().to_owned());
        func.call(args)
    }

    fn interner(&self) -> &StringInterner {
        self.interner
    }
}
