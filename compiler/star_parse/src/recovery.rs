//! Error recovery: skip to a point where statement parsing can resume.

use star_ir::TokenKind;

use crate::cursor::Cursor;

/// Tokens that can begin a statement or clause.
fn is_statement_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Let
            | TokenKind::Return
            | TokenKind::Throw
            | TokenKind::Break
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
    )
}

/// Advance past the failed statement.
///
/// Stops after a `;`, or before `}`, EOF, or a statement keyword. Callers
/// must still guarantee progress when this consumes nothing.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>) {
    loop {
        match cursor.current_kind() {
            TokenKind::Eof | TokenKind::RBrace => return,
            TokenKind::Semicolon => {
                cursor.advance();
                return;
            }
            kind if is_statement_start(kind) => return,
            _ => {
                cursor.advance();
            }
        }
    }
}

/// Skip to the next `case`, `default`, or the `}` closing a `switch*` body.
pub(crate) fn synchronize_clause(cursor: &mut Cursor<'_>) {
    let mut depth = 0u32;
    loop {
        match cursor.current_kind() {
            TokenKind::Eof => return,
            TokenKind::Case | TokenKind::Default if depth == 0 => return,
            TokenKind::RBrace if depth == 0 => return,
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        cursor.advance();
    }
}
