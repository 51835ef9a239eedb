//! Statements, scoping and control flow outside `switch*`.

use pretty_assertions::assert_eq;
use star_diagnostic::ErrorCode;
use star_ir::StringInterner;
use star_patterns::{compile_program, Value};

use super::{run, run_configured, run_err};
use crate::{buffer_handler, InterpreterBuilder};

#[test]
fn top_level_return_is_the_program_result() {
    let (output, result) = run_configured(r#"print("a"); return "done"; print("b");"#, |b| b);
    assert_eq!(output, "a\n");
    assert_eq!(result, Ok(Value::string("done")));

    let (_, bare) = run_configured("return;", |b| b);
    assert_eq!(bare, Ok(Value::Undefined));
}

#[test]
fn top_level_break_escapes() {
    let (_, error) = run_err("break;");
    assert_eq!(error.code(), ErrorCode::E6006);
}

#[test]
fn break_inside_a_block_still_escapes() {
    let (output, error) = run_err(r#"{ print("in"); break; } print("out");"#);
    assert_eq!(output, "in\n");
    assert_eq!(error.code(), ErrorCode::E6006);
}

#[test]
fn uncaught_throw() {
    let (_, error) = run_err("throw { reason: 1 };");
    assert_eq!(error.code(), ErrorCode::E6005);
    assert_eq!(
        error.thrown_value(),
        Some(&Value::object_from([("reason", Value::Number(1.0))]))
    );
    assert!(error.notes.is_empty());
}

#[test]
fn blocks_introduce_scopes() {
    let output = run(r#"
        let x = 1;
        { let x = 2; print(x); }
        print(x);
    "#);
    assert_eq!(output, "2\n1\n");
}

#[test]
fn assignment_reaches_the_enclosing_scope() {
    let output = run("let x = 1; { x = x + 1; } print(x);");
    assert_eq!(output, "2\n");
}

#[test]
fn prelude_globals_are_immutable() {
    let (_, error) = run_err("print = 1;");
    assert_eq!(error.code(), ErrorCode::E6099);
    assert!(error.message.contains("immutable"), "{}", error.message);
}

#[test]
fn without_prelude_print_is_undefined() {
    let (_, result) = run_configured(r#"print("hi");"#, |b| b.prelude(false));
    assert_eq!(result.map_err(|e| e.code()), Err(ErrorCode::E6003));
}

#[test]
fn extra_globals_are_visible() {
    let (output, result) =
        run_configured("print(answer);", |b| b.global("answer", Value::Number(42.0)));
    assert_eq!(result, Ok(Value::Undefined));
    assert_eq!(output, "42\n");
}

#[test]
fn scopes_unwind_after_the_program_finishes() {
    let interner = StringInterner::new();
    let source = "let total = 1; switch* ([2]) { case ([n]) { total = total + n; } }";
    let tokens = star_lexer::lex(source, &interner);
    let parsed = star_parse::parse(&tokens, &interner);
    let compiled = compile_program(&parsed.program, &parsed.arena, &interner);
    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena, &compiled)
        .print_handler(buffer_handler())
        .build();

    assert_eq!(interpreter.run(&parsed.program), Ok(Value::Undefined));
    assert_eq!(interpreter.env().depth(), 1);
    assert_eq!(
        interpreter.env().lookup(interner.intern("total")),
        Some(Value::Number(3.0))
    );
    assert_eq!(interpreter.env().lookup(interner.intern("n")), None);
    assert_eq!(interpreter.print_handler().get_output(), "");
}
