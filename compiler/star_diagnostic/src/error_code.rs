//! Error codes for all diagnostics.
//!
//! The first digit names the phase that produced the diagnostic.

use std::fmt;

/// Error codes.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E3xxx: `switch*` pattern errors and lints
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// `switch` without `*`
    E1005,
    /// Shorthand property initializer outside a pattern slot
    E1006,
    /// Empty `case ()` pattern list
    E1007,
    /// Left side of `=` cannot be assigned to
    E1008,

    // Pattern Errors (E3xxx)
    /// Pattern is neither a valid expression nor a valid destructuring target
    E3001,
    /// Name bound twice in one destructuring pattern
    E3002,
    /// `default` clause is not the last clause
    E3003,
    /// Unreachable pattern (warning)
    E3004,
    /// Destructuring pattern mixed with other patterns in one clause
    E3005,

    // Runtime Errors (E6xxx)
    /// Value cannot be destructured by the pattern's shape
    E6001,
    /// Value is not callable
    E6002,
    /// Undefined variable
    E6003,
    /// Type error in an operator or property access
    E6004,
    /// Uncaught thrown value
    E6005,
    /// `break` or `return` outside any enclosing construct
    E6006,
    /// Name bound twice while merging match bindings
    E6007,
    /// Other runtime failure
    E6099,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6099 => "E6099",
        }
    }

    /// Short description, used by `starc explain`-style listings and tests.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "only `switch*` is supported",
            ErrorCode::E1006 => "shorthand initializer outside a pattern",
            ErrorCode::E1007 => "empty pattern list",
            ErrorCode::E1008 => "invalid assignment target",
            ErrorCode::E3001 => "malformed case pattern",
            ErrorCode::E3002 => "duplicate binding in pattern",
            ErrorCode::E3003 => "misplaced default clause",
            ErrorCode::E3004 => "unreachable pattern",
            ErrorCode::E3005 => "destructuring pattern mixed with other patterns",
            ErrorCode::E6001 => "cannot destructure value",
            ErrorCode::E6002 => "value is not callable",
            ErrorCode::E6003 => "undefined variable",
            ErrorCode::E6004 => "type error",
            ErrorCode::E6005 => "uncaught exception",
            ErrorCode::E6006 => "control flow escaped its construct",
            ErrorCode::E6007 => "binding collision",
            ErrorCode::E6099 => "runtime error",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_pattern_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
