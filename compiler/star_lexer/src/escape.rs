//! Escape sequences in string literals.
//!
//! Recognized: `\n`, `\r`, `\t`, `\\`, `\"`, `\'`, `\0`. Anything else is
//! kept literally, backslash included.

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Unescape the body of a string literal (quotes already stripped).
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}
