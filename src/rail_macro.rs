//! rail! macro for do-notation style sequential composition.
//!
//! This module provides the `rail!` macro, which allows chaining
//! [`Outcome`](crate::outcome::Outcome) computations in a readable,
//! imperative-looking style similar to Haskell's do-notation or F#'s
//! computation expressions.
//!
//! # Syntax
//!
//! The macro supports the following constructs:
//!
//! - `pattern <= expression;` - Bind: extracts the success value from an outcome
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final expression (wrapped via `Outcome::pass`)
//! - `expression` - Final expression (already an outcome, returned unchanged)
//! - empty block - No-op success, `Outcome::pass(())`
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//! - It's a valid token in Rust macros
//!
//! # Semantics
//!
//! Every block desugars to repeated [`bind`](crate::outcome::Outcome::bind)
//! calls and nothing else: the first `Fail` short-circuits the remaining
//! steps, and accumulated messages thread forward in production order.
//!
//! # Examples
//!
//! ```rust
//! use railway::outcome::Outcome;
//! use railway::rail;
//!
//! let result: Outcome<i32, String> = rail! {
//!     x <= Outcome::pass(5);
//!     y <= Outcome::pass(10);
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(result, Outcome::Pass(30, vec![]));
//! ```
//!
//! Short-circuit on failure:
//!
//! ```rust
//! use railway::outcome::Outcome;
//! use railway::rail;
//!
//! let result: Outcome<i32, &str> = rail! {
//!     x <= Outcome::pass(5);
//!     y <= Outcome::<i32, &str>::fail("boom");
//!     yield x + y
//! };
//! assert_eq!(result, Outcome::Fail(vec!["boom"]));
//! ```
//!
//! # Implementation Notes
//!
//! The macro expands `pattern <= expression; rest` into:
//! ```rust,ignore
//! expression.bind(move |pattern| { /* rest */ })
//! ```
//!
//! The terminal `yield expression` expands to `Outcome::pass(expression)`,
//! a terminal bare expression is returned as-is, and an empty block expands
//! to `Outcome::pass(())`.

#![forbid(unsafe_code)]

/// A macro for do-notation style composition of outcomes.
///
/// This macro allows you to write sequential two-track computations in an
/// imperative-looking style. Each step short-circuits on the first `Fail`
/// and otherwise threads the accumulated messages forward, exactly as
/// repeated [`bind`](crate::outcome::Outcome::bind) calls would.
///
/// # Syntax
///
/// ```text
/// rail! {
///     pattern <= outcome_expression;   // Bind operation
///     let pattern = expression;        // Pure let binding
///     yield expression                 // Final expression (wrapped via pass)
/// }
/// ```
///
/// A terminal bare expression returns an existing outcome unchanged, and an
/// empty block produces the no-op success `Outcome::pass(())`.
///
/// # Examples
///
/// ```rust
/// use railway::outcome::Outcome;
/// use railway::rail;
///
/// let result: Outcome<i32, &str> = rail! {
///     x <= Outcome::pass(5);
///     y <= Outcome::pass(10);
///     yield x + y
/// };
/// assert_eq!(result, Outcome::Pass(15, vec![]));
///
/// // Messages accumulate in production order
/// let result: Outcome<i32, &str> = rail! {
///     x <= Outcome::Pass(1, vec!["first"]);
///     y <= Outcome::Pass(2, vec!["second"]);
///     yield x + y
/// };
/// assert_eq!(result, Outcome::Pass(3, vec!["first", "second"]));
/// ```
#[macro_export]
macro_rules! rail {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    // Case 1: Empty block - the no-op success
    () => {
        $crate::outcome::Outcome::pass(())
    };

    // Case 2: yield wraps a bare value via pass
    (yield $result:expr) => {
        $crate::outcome::Outcome::pass($result)
    };

    // Case 3: Single expression (terminal) - an existing outcome, returned as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= outcome; rest
    // ==========================================================================

    // Case 4: Bind with identifier pattern
    ($pattern:ident <= $outcome:expr ; $($rest:tt)+) => {
        $outcome.bind(move |$pattern| {
            $crate::rail!($($rest)+)
        })
    };

    // Case 5: Bind with tuple pattern
    (($($pattern:tt)*) <= $outcome:expr ; $($rest:tt)+) => {
        $outcome.bind(move |($($pattern)*)| {
            $crate::rail!($($rest)+)
        })
    };

    // Case 6: Bind with wildcard pattern
    (_ <= $outcome:expr ; $($rest:tt)+) => {
        $outcome.bind(move |_| {
            $crate::rail!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 7: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::rail!($($rest)+)
        }
    };

    // Case 8: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::rail!($($rest)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::outcome::Outcome;

    #[test]
    fn basic_bind() {
        let result: Outcome<i32, &str> = rail! {
            x <= Outcome::pass(5);
            y <= Outcome::pass(10);
            yield x + y
        };
        assert_eq!(result, Outcome::Pass(15, vec![]));
    }

    #[test]
    fn with_let() {
        let result: Outcome<i32, &str> = rail! {
            x <= Outcome::pass(5);
            let doubled = x * 2;
            yield doubled
        };
        assert_eq!(result, Outcome::Pass(10, vec![]));
    }

    #[test]
    fn short_circuit() {
        let result: Outcome<i32, &str> = rail! {
            x <= Outcome::pass(5);
            y <= Outcome::<i32, &str>::fail("boom");
            yield x + y
        };
        assert_eq!(result, Outcome::Fail(vec!["boom"]));
    }

    #[test]
    fn terminal_outcome_passthrough() {
        let result: Outcome<i32, &str> = rail! {
            x <= Outcome::pass(5);
            Outcome::pass(x + 1)
        };
        assert_eq!(result, Outcome::Pass(6, vec![]));
    }

    #[test]
    fn empty_block_is_unit_pass() {
        let result: Outcome<(), &str> = rail! {};
        assert_eq!(result, Outcome::pass(()));
    }

    #[test]
    fn wildcard_pattern() {
        let result: Outcome<i32, &str> = rail! {
            _ <= Outcome::pass(5);
            yield 42
        };
        assert_eq!(result, Outcome::Pass(42, vec![]));
    }

    #[test]
    fn tuple_pattern() {
        let result: Outcome<i32, &str> = rail! {
            (a, b) <= Outcome::pass((1, 2));
            yield a + b
        };
        assert_eq!(result, Outcome::Pass(3, vec![]));
    }
}
