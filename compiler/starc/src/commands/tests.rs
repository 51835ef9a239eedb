use pretty_assertions::assert_eq;
use star_diagnostic::emitter::{ColorMode, TerminalEmitter};
use star_eval::buffer_handler;

use super::{check_source, run_source, write_ast, write_tokens};
use crate::RunConfig;

fn emitter(source: &str) -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("demo.star", source)
}

fn rendered(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Run `source`, returning success, program output and diagnostics.
fn run_with(source: &str, config: &RunConfig) -> (bool, String, String) {
    let handler = buffer_handler();
    let mut emitter = emitter(source);
    let ok = run_source(source, config, handler.clone(), &mut emitter);
    (ok, handler.get_output(), rendered(emitter))
}

const UNREACHABLE: &str = r#"
switch* (1) {
    case (1) { print("one"); }
    case (1) { print("again"); }
}
"#;

#[test]
fn run_prints_program_output() {
    let source = r#"switch* ([1, 2]) { case ([a, ...rest]) { print(a, rest); } }"#;
    let (ok, output, diagnostics) = run_with(source, &RunConfig::new("demo.star"));
    assert!(ok);
    assert_eq!(output, "1 [2]\n");
    assert_eq!(diagnostics, "");
}

#[test]
fn warnings_do_not_stop_a_run() {
    let (ok, output, diagnostics) = run_with(UNREACHABLE, &RunConfig::new("demo.star"));
    assert!(ok);
    assert_eq!(output, "one\n");
    assert!(diagnostics.starts_with("warning [E3004]: unreachable pattern"), "{diagnostics}");
    assert!(diagnostics.contains("--> demo.star:4:"), "{diagnostics}");
    assert!(diagnostics.contains("1 warning emitted"), "{diagnostics}");
}

#[test]
fn deny_warnings_turns_lints_into_errors() {
    let config = RunConfig {
        deny_warnings: true,
        ..RunConfig::new("demo.star")
    };
    let (ok, output, diagnostics) = run_with(UNREACHABLE, &config);
    assert!(!ok);
    assert_eq!(output, "");
    assert!(diagnostics.starts_with("error [E3004]"), "{diagnostics}");
    assert!(diagnostics.contains("aborting due to previous error"), "{diagnostics}");
}

#[test]
fn compile_errors_prevent_running() {
    let source = r#"print("before"); switch* ([1, 1]) { case ([a, a]) { print(a); } }"#;
    let (ok, output, diagnostics) = run_with(source, &RunConfig::new("demo.star"));
    assert!(!ok);
    assert_eq!(output, "");
    assert!(diagnostics.contains("[E3002]"), "{diagnostics}");
}

#[test]
fn runtime_errors_are_reported_with_their_code() {
    let source = r#"switch* (5) { case ([a]) { print(a); } }"#;
    let (ok, _, diagnostics) = run_with(source, &RunConfig::new("demo.star"));
    assert!(!ok);
    assert!(diagnostics.starts_with("error [E6001]"), "{diagnostics}");
}

#[test]
fn no_prelude() {
    let config = RunConfig {
        prelude: false,
        ..RunConfig::new("demo.star")
    };
    let (ok, _, diagnostics) = run_with(r#"print("hi");"#, &config);
    assert!(!ok);
    assert!(diagnostics.contains("[E6003]"), "{diagnostics}");
}

#[test]
fn lex_errors_stop_before_parsing() {
    let source = "let s = \"open;\nlet t = #;";
    let mut emitter = emitter(source);
    assert_eq!(check_source(source, &RunConfig::new("demo.star"), &mut emitter), None);
    let diagnostics = rendered(emitter);
    assert!(diagnostics.contains("[E0001]"), "{diagnostics}");
    assert!(!diagnostics.contains("[E1"), "{diagnostics}");
}

#[test]
fn check_counts_sites() {
    let source = "switch* (1) { default {} } switch* (2) { case (2) { switch* (3) {} } }";
    let mut emitter = emitter(source);
    assert_eq!(check_source(source, &RunConfig::new("demo.star"), &mut emitter), Some(3));
    assert_eq!(rendered(emitter), "");
}

#[test]
fn token_dump() {
    let mut out = Vec::new();
    assert!(write_tokens("let x = 1;", &mut out).is_ok());
    let text = String::from_utf8_lossy(&out);
    assert!(text.starts_with("6 tokens\n"), "{text}");
    assert!(text.contains("Let @"), "{text}");
    assert!(text.contains("Eof @"), "{text}");
}

#[test]
fn ast_dump() {
    let mut out = Vec::new();
    assert!(write_ast("switch* (1) { default {} }", &mut out).is_ok());
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("switch* sites: 1"), "{text}");
    assert!(text.contains("SwitchStar"), "{text}");
    assert!(text.contains("Errors: 0"), "{text}");
}
