//! Dispatch behavior of `switch*`, end to end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use star_diagnostic::ErrorCode;
use star_patterns::{Comparator, Value};

use super::{compile_diagnostics, run, run_configured, run_err};
use crate::buffer_handler;

#[test]
fn default_only_runs_once() {
    let output = run(r#"switch* (1) { default { print("default"); } }"#);
    assert_eq!(output, "default\n");
}

#[test]
fn first_matching_clause_wins_without_fallthrough() {
    let output = run(r#"
        switch* (2) {
            case (1, 2) { print("first"); }
            case (2) { print("second"); }
            default { print("default"); }
        }
    "#);
    assert_eq!(output, "first\n");
}

#[test]
fn no_match_without_default_does_nothing() {
    let (output, result) = run_configured(
        r#"switch* (3) { case (1) { print("one"); } } print("after");"#,
        |b| b,
    );
    assert_eq!(output, "after\n");
    assert_eq!(result, Ok(Value::Undefined));
}

#[test]
fn head_and_rest() {
    let source = r#"
        let show = [[1, 2, 3], [1], []];
        switch* (show[0]) { case ([x, ...xs]) { print(x, xs); } }
        switch* (show[1]) { case ([x, ...xs]) { print(x, xs); } }
        switch* (show[2]) { case ([x, ...xs]) { print(x, xs); } default { print("empty"); } }
    "#;
    assert_eq!(run(source), "1 [2, 3]\n1 []\nempty\n");
}

#[test]
fn custom_comparator_selects_coprime_clause() {
    let output = run(r#"
        switch* (14; isCoPrimeTo) {
            case (2, 4, 6, 8) { print("shares a factor"); }
            case (15) { print("coprime"); }
        }
    "#);
    assert_eq!(output, "coprime\n");
}

#[test]
fn object_shape_with_holes_and_rest() {
    let output = run(r#"
        let value = { foo: 1, bar: ["a", "b", "c", "d", "e"], bruh: true };
        switch* (value) {
            case ({ bruh, bar: [ , , ...message] }) { print(bruh, message); }
        }
    "#);
    assert_eq!(output, r#"true ["c", "d", "e"]"#.to_owned() + "\n");
}

#[test]
fn object_rest_collects_undeclared_keys() {
    let output = run(r#"
        switch* ({ a: 1, b: 2, c: 3 }) { case ({ b, ...others }) { print(b, others); } }
    "#);
    assert_eq!(output, "2 { a: 1, c: 3 }\n");
}

#[test]
fn bindings_are_scoped_to_the_clause() {
    let output = run(r#"
        let x = "outer";
        switch* ([1]) { case ([x]) { print(x); } }
        print(x);
    "#);
    assert_eq!(output, "1\nouter\n");
}

#[test]
fn bindings_are_mutable_in_the_body() {
    let output = run(r#"switch* ([1]) { case ([a]) { a = a + 1; print(a); } }"#);
    assert_eq!(output, "2\n");
}

#[test]
fn defaults_fill_missing_and_undefined_positions() {
    let output = run(r#"
        let fallback = 9;
        switch* ([undefined]) { case ([a = fallback, b = 2]) { print(a, b); } }
        switch* ({}) { case ({ c = "c" }) { print(c); } }
    "#);
    assert_eq!(output, "9 2\nc\n");
}

#[test]
fn defaults_do_not_see_earlier_bindings() {
    let (output, error) = run_err(r#"switch* ([]) { case ([a = 1, b = a]) { print(a, b); } }"#);
    assert_eq!(output, "");
    assert_eq!(error.code(), ErrorCode::E6003);
}

#[test]
fn string_subjects_destructure_by_character() {
    let output =
        run(r#"switch* ("hey") { case ([first, ...others]) { print(first, len(others)); } }"#);
    assert_eq!(output, "h 2\n");
}

#[test]
fn shape_mismatch_falls_through_to_default() {
    let output = run(r#"
        switch* (5) {
            case ({ a }) { print("has a"); }
            default { print("default"); }
        }
    "#);
    assert_eq!(output, "default\n");
}

#[test]
fn non_iterable_subject_for_array_shape_is_an_error() {
    let (output, error) = run_err(r#"
        switch* (5) {
            case ([a]) { print("array"); }
            default { print("default"); }
        }
    "#);
    assert_eq!(output, "");
    assert_eq!(error.code(), ErrorCode::E6001);
}

#[test]
fn nullish_subject_for_object_shape_is_an_error() {
    let (_, error) = run_err(r#"switch* (null) { case ({ a }) { print(a); } }"#);
    assert_eq!(error.code(), ErrorCode::E6001);
}

#[test]
fn break_ends_the_switch() {
    let output = run(r#"
        switch* (1) { case (1) { print("a"); break; print("b"); } }
        print("c");
    "#);
    assert_eq!(output, "a\nc\n");
}

#[test]
fn return_propagates_out_of_the_switch() {
    let (output, result) = run_configured(
        r#"switch* (1) { case (1) { return 42; } } print("unreached");"#,
        |b| b,
    );
    assert_eq!(output, "");
    assert_eq!(result, Ok(Value::Number(42.0)));
}

#[test]
fn throw_propagates_with_clause_note() {
    let (_, error) = run_err(r#"switch* (1) { case (0) {} case (1) { throw "boom"; } }"#);
    assert_eq!(error.code(), ErrorCode::E6005);
    assert_eq!(error.thrown_value(), Some(&Value::string("boom")));
    assert_eq!(error.notes.len(), 1);
    assert_eq!(error.notes[0].message, "in clause 2 of this `switch*`");
}

#[test]
fn break_in_nested_switch_only_exits_the_inner_one() {
    let output = run(r#"
        switch* ([1, [2, 3]]) {
            case ([a, inner]) {
                switch* (inner) { case ([b, ...rest]) { print(a, b, rest); break; } }
                print("outer continues");
            }
        }
    "#);
    assert_eq!(output, "1 2 [3]\nouter continues\n");
}

#[test]
fn capability_predicate() {
    let output = run(r#"
        let duck = { quack: print };
        let rock = { weight: 3 };
        switch* (duck) {
            case (is hasCallable("quack")) { print("duck"); }
            default { print("not a duck"); }
        }
        switch* (rock) {
            case (is hasCallable("quack")) { print("duck"); }
            default { print("not a duck"); }
        }
    "#);
    assert_eq!(output, "duck\nnot a duck\n");
}

#[test]
fn tag_comparator() {
    let output = run(r#"
        let donald = tag("Duck", { name: "donald" });
        switch* (donald; instanceOf) {
            case ("Goose") { print("goose"); }
            case ("Duck") { print("duck"); }
        }
    "#);
    assert_eq!(output, "duck\n");
}

#[test]
fn later_literals_are_not_evaluated_after_a_match() {
    let output = run(r#"
        switch* (1) {
            case (1) { print("one"); }
            case (missing) { print("never"); }
        }
    "#);
    assert_eq!(output, "one\n");
}

#[test]
fn subject_is_evaluated_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let tick = Value::native("tick", move |_| {
        #[expect(clippy::cast_precision_loss, reason = "small test counter")]
        let n = counter.fetch_add(1, Ordering::SeqCst) as f64;
        Ok(Value::Number(n))
    });
    let (output, result) = run_configured(
        r#"switch* (tick()) { case (5) {} case (6) {} default { print("default"); } }"#,
        |b| b.global("tick", tick),
    );
    assert_eq!(result, Ok(Value::Undefined));
    assert_eq!(output, "default\n");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn comparator_sees_candidate_then_subject() {
    let log = buffer_handler();
    let sink = log.clone();
    let compare = Value::native("compare", move |args| {
        sink.println(&format!("{} vs {}", args[0], args[1]));
        Ok(Value::Bool(false))
    });
    let (output, result) = run_configured(
        r#"switch* ("s"; compare) { case (1, 2) {} case (3) {} default { print("none"); } }"#,
        |b| b.global("compare", compare),
    );
    assert_eq!(result, Ok(Value::Undefined));
    assert_eq!(output, "none\n");
    assert_eq!(log.get_output(), "1 vs s\n2 vs s\n3 vs s\n");
}

#[test]
fn interpreter_default_comparator() {
    let source =
        r#"switch* ("1") { case (1) { print("matched"); } default { print("default"); } }"#;

    let (strict_output, _) = run_configured(source, |b| b);
    assert_eq!(strict_output, "default\n");

    let loose = Value::native("loose", |args| Ok(Value::Bool(args[0].loose_equals(&args[1]))));
    let custom = match Comparator::custom(loose) {
        Ok(comparator) => comparator,
        Err(error) => panic!("native should be callable: {error}"),
    };
    let (custom_output, result) = run_configured(source, move |b| b.default_comparator(custom));
    assert_eq!(result, Ok(Value::Undefined));
    assert_eq!(custom_output, "matched\n");
}

#[test]
fn non_callable_site_comparator_is_an_error() {
    let (_, error) = run_err(r#"switch* (1; 5) { case (1) {} }"#);
    assert_eq!(error.code(), ErrorCode::E6002);
}

#[test]
fn misplaced_default_is_a_compile_error() {
    let diagnostics = compile_diagnostics("switch* (1) { default {} case (1) {} }");
    assert!(diagnostics.iter().any(|d| d.code == ErrorCode::E3003));
}

#[test]
fn single_statement_clause_bodies() {
    let output = run(r#"
        switch* ("b") {
            case ("a") print("a");
            case ("b") print("b");
            default print("default");
        }
    "#);
    assert_eq!(output, "b\n");
}
