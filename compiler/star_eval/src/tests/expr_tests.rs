//! Expression evaluation through the full pipeline.

use pretty_assertions::assert_eq;
use star_diagnostic::ErrorCode;

use super::{run, run_err};

#[test]
fn arithmetic_precedence() {
    assert_eq!(run("print(1 + 2 * 3, (1 + 2) * 3, 7 % 4, -2 - 1);"), "7 9 3 -3\n");
}

#[test]
fn string_concatenation_and_comparison() {
    assert_eq!(
        run(r#"print("a" + 1, "abc" < "abd", "10" == 10, "10" === 10);"#),
        "a1 true true false\n"
    );
}

#[test]
fn logical_operators_short_circuit() {
    let output = run(r#"
        let a = false && missing;
        let b = true || missing;
        print(a, b, null || "fallback", 0 && "skipped");
    "#);
    assert_eq!(output, "false true fallback 0\n");
}

#[test]
fn typeof_operator() {
    assert_eq!(
        run(
            r#"print(typeof 1, typeof "s", typeof null, typeof undefined, typeof print, typeof []);"#
        ),
        "number string object undefined function object\n"
    );
}

#[test]
fn member_and_index_access() {
    let output = run(r#"
        let o = { name: "star", items: [10, 20] };
        print(o.name, o.items[1], o.items.length, o.missing, "hey"[0]);
    "#);
    assert_eq!(output, "star 20 2 undefined h\n");
}

#[test]
fn spreads() {
    let output = run(r#"
        let xs = [2, 3];
        let o = { a: 1, b: 2 };
        print([1, ...xs, ..."ab"], { ...o, b: 3, c: 4 });
    "#);
    assert_eq!(output, r#"[1, 2, 3, "a", "b"] { a: 1, b: 3, c: 4 }"#.to_owned() + "\n");
}

#[test]
fn spreading_a_non_iterable_is_an_error() {
    let (_, error) = run_err("let n = 1; print([...n]);");
    assert_eq!(error.code(), ErrorCode::E6004);
}

#[test]
fn property_of_null_is_an_error() {
    let (_, error) = run_err("let n = null; print(n.x);");
    assert_eq!(error.code(), ErrorCode::E6004);
}

#[test]
fn undefined_variable() {
    let (_, error) = run_err("print(nope);");
    assert_eq!(error.code(), ErrorCode::E6003);
    assert_eq!(error.message, "undefined variable: nope");
}

#[test]
fn calling_a_non_function() {
    let (_, error) = run_err("let x = 3; x();");
    assert_eq!(error.code(), ErrorCode::E6002);
}
