//! Stack growth for deeply nested input.
//!
//! Nested array/object literals, nested destructuring shapes, and nested
//! `switch*` bodies all recurse. Wrap each recursive entry point in
//! [`ensure_sufficient_stack`] so pathological nesting grows the stack
//! instead of overflowing it.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Remaining stack below which we grow (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn match_shape(&mut self, shape: &Shape, value: &Value) -> MatchResult {
///     ensure_sufficient_stack(|| self.match_shape_inner(shape, value))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| 7), 7);
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        fn nest(depth: u32) -> u32 {
            ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
        }

        assert_eq!(nest(100_000), 100_000);
    }

    #[test]
    fn propagates_results() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
