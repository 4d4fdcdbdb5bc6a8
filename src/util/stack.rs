use std::cell::Cell;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Stack space that must remain before recursing further (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated each time the stack has to grow (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Maximum number of nested user-defined function calls.
pub const MAX_CALL_DEPTH: usize = 10_000;

thread_local! {
    static CALL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Runs `f`, first growing the native stack if less than the red zone is
/// left.
///
/// The parser and evaluator recurse once per nested construct; wrapping
/// their recursive entry points keeps deeply nested input from overflowing
/// the host stack.
///
/// ## Example
/// ```
/// use monkey::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
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

/// Marks one active user-defined call; the depth drops again when the guard
/// is dropped, whether the call returned a value or an error.
#[derive(Debug)]
pub struct CallDepthGuard {
    _private: (),
}

impl Drop for CallDepthGuard {
    fn drop(&mut self) {
        CALL_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Enters a user-defined function call on the current thread.
///
/// ## Errors
/// Returns `RuntimeError::RecursionLimit` if [`MAX_CALL_DEPTH`] calls are
/// already active.
///
/// ## Example
/// ```
/// use monkey::util::stack::{call_depth, enter_call};
///
/// let before = call_depth();
/// {
///     let _guard = enter_call().unwrap();
///     assert_eq!(call_depth(), before + 1);
/// }
/// assert_eq!(call_depth(), before);
/// ```
pub fn enter_call() -> EvalResult<CallDepthGuard> {
    CALL_DEPTH.with(|depth| {
        let current = depth.get();
        if current >= MAX_CALL_DEPTH {
            tracing::debug!(depth = current, "recursion limit reached");
            return Err(RuntimeError::RecursionLimit { depth: MAX_CALL_DEPTH });
        }
        depth.set(current + 1);
        Ok(CallDepthGuard { _private: () })
    })
}

/// Number of user-defined calls currently active on this thread.
#[must_use]
pub fn call_depth() -> usize {
    CALL_DEPTH.with(Cell::get)
}
