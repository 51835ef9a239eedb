use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E3002)
        .with_message("`x` is bound more than once in this pattern")
        .with_label(Span::new(12, 13), "second binding")
        .with_secondary_label(Span::new(6, 7), "first bound here")
        .with_note("each name in a destructuring pattern must be unique");

    assert_eq!(diag.code, ErrorCode::E3002);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.primary_span(), Some(Span::new(12, 13)));
}

#[test]
fn test_warning_promotion() {
    let diag = Diagnostic::warning(ErrorCode::E3004).with_message("unreachable pattern");
    assert!(diag.is_warning());

    let promoted = diag.into_error();
    assert!(promoted.is_error());
    assert_eq!(promoted.code, ErrorCode::E3004);
}

#[test]
fn test_into_error_on_an_error_is_a_no_op() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_note("n");
    assert_eq!(diag.clone().into_error(), diag);
}

#[test]
fn test_primary_span_absent() {
    let diag = Diagnostic::error(ErrorCode::E6099).with_message("no location");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::warning(ErrorCode::E3004)
        .with_message("unreachable pattern")
        .with_label(Span::new(40, 43), "already matched")
        .with_secondary_label(Span::new(10, 13), "first matched here")
        .with_note("earlier clauses always win")
        .with_suggestion("remove this pattern");

    let output = diag.to_string();
    assert!(output.starts_with("warning [E3004]: unreachable pattern"));
    assert!(output.contains("--> 40..43: already matched"));
    assert!(output.contains("::: 10..13: first matched here"));
    assert!(output.contains("= note: earlier clauses always win"));
    assert!(output.contains("= help: remove this pattern"));
}

#[test]
fn test_count_by_severity() {
    let diags = vec![
        Diagnostic::error(ErrorCode::E3003),
        Diagnostic::warning(ErrorCode::E3004),
        Diagnostic::warning(ErrorCode::E3004),
    ];
    assert_eq!(crate::count_by_severity(&diags), (1, 2));
}
