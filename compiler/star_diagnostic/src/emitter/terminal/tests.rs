use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

const SOURCE: &str = "let v = [1, 2];\nswitch* (v) {\n  case ([a, a]) { print(a); }\n}\n";

fn collision() -> Diagnostic {
    // `a` at 39 and 42 on line 3
    Diagnostic::error(ErrorCode::E3002)
        .with_message("`a` is bound more than once in this pattern")
        .with_label(Span::new(42, 43), "second binding of `a`")
        .with_secondary_label(Span::new(39, 40), "first bound here")
        .with_note("each name in a destructuring pattern must be unique")
}

fn render(diag: &Diagnostic, colors: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), colors, false)
        .with_source("demo.star", SOURCE);
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn renders_line_col_and_carets() {
    let text = render(&collision(), ColorMode::Never);
    let expected = "\
error [E3002]: `a` is bound more than once in this pattern
 --> demo.star:3:13
  |
3 |   case ([a, a]) { print(a); }
  |             ^ second binding of `a`
 ::: demo.star:3:10
  |
3 |   case ([a, a]) { print(a); }
  |          - first bound here
  = note: each name in a destructuring pattern must be unique

";
    assert_eq!(text, expected);
}

#[test]
fn without_source_prints_byte_ranges() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit(&collision());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("--> 42..43: second binding of `a`"));
}

#[test]
fn colors_follow_mode() {
    assert!(render(&collision(), ColorMode::Always).contains("\x1b["));
    assert!(!render(&collision(), ColorMode::Never).contains("\x1b["));
    assert!(!render(&collision(), ColorMode::Auto).contains("\x1b["));
}

#[test]
fn caret_width_is_clamped_to_line() {
    assert_eq!(caret_line("abc", 2, Span::new(1, 50), true), " ^^");
    assert_eq!(caret_line("abc", 1, Span::new(0, 0), false), "-");
}

#[test]
fn summary_errors_and_warnings() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "error: aborting due to 2 previous errors; 1 warning emitted\n");
}

#[test]
fn summary_warnings_only() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn color_mode_auto_uses_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
