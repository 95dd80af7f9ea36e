//! Outcome type - a two-track result with message accumulation.
//!
//! This module provides the `Outcome<S, M>` type, which represents a value
//! that is either a `Pass(S, Vec<M>)` or a `Fail(Vec<M>)`. It is the core of
//! railway-oriented programming:
//!
//! - `Pass` carries a success value together with the informational messages
//!   accumulated so far
//! - `Fail` carries one or more error messages and no value
//!
//! Every combinator consumes its input and produces a new `Outcome`, so each
//! value flows linearly through a pipeline. Two invariants hold across the
//! whole algebra:
//!
//! - **Message order**: messages are always a strict concatenation of
//!   earlier-produced messages followed by later-produced messages
//! - **Short-circuit**: once a pipeline reaches `Fail`, no downstream
//!   computation that depends on the success value is invoked; only message
//!   accumulation continues
//!
//! # Laws
//!
//! `bind` satisfies the monad laws, with message lists compared for equality:
//!
//! ## Left Identity Law
//!
//! ```text
//! Outcome::pass(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! outcome.bind(Outcome::pass) == outcome
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! outcome.bind(f).bind(g) == outcome.bind(|x| f(x).bind(g))
//! ```
//!
//! ## Short-Circuit Law
//!
//! ```text
//! Outcome::Fail(messages).bind(f) == Outcome::Fail(messages)   // f never invoked
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::outcome::Outcome;
//!
//! // Creating outcomes
//! let pass: Outcome<i32, String> = Outcome::pass(42);
//! let fail: Outcome<i32, String> = Outcome::fail("boom".to_string());
//!
//! // Pattern matching
//! match pass {
//!     Outcome::Pass(value, messages) => println!("passed: {value} ({messages:?})"),
//!     Outcome::Fail(messages) => println!("failed: {messages:?}"),
//! }
//!
//! // Using either to handle both cases
//! let text = fail.either(
//!     |value, _| format!("passed: {value}"),
//!     |messages| format!("failed: {}", messages.join(", ")),
//! );
//! assert_eq!(text, "failed: boom");
//! ```

use std::fmt;

/// A two-track result: a success value with accumulated messages, or a
/// failure with accumulated error messages.
///
/// `Outcome<S, M>` represents the result of a computation that may fail.
/// By convention:
/// - `Pass` carries the success value plus zero or more informational or
///   warning messages, in the order they were produced
/// - `Fail` carries one or more error messages, in the order they were
///   produced; the first message is the original reason for failure
///
/// The algebra is fully generic: `S` and `M` are arbitrary caller-supplied
/// types. The only capability required anywhere is `M: Display` on
/// [`return_or_fail`](Outcome::return_or_fail), which formats messages into
/// the fatal-error text.
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `M` - The type of the accumulated messages
///
/// # Examples
///
/// ```rust
/// use railway::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::pass(42);
/// let failure: Outcome<i32, String> = Outcome::fail("error".to_string());
///
/// // Map over the success value
/// let doubled = success.lift(|x| x * 2);
/// assert_eq!(doubled, Outcome::Pass(84, vec![]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, M> {
    /// The success variant, carrying a value and the messages accumulated so far.
    Pass(S, Vec<M>),
    /// The failure variant, carrying one or more error messages.
    Fail(Vec<M>),
}

impl<S, M> Outcome<S, M> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as a success with no messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::pass(42);
    /// assert_eq!(outcome, Outcome::Pass(42, vec![]));
    /// ```
    #[inline]
    pub const fn pass(value: S) -> Self {
        Self::Pass(value, Vec::new())
    }

    /// Wraps a single message as a failure.
    ///
    /// A failure built this way always carries at least one message: the
    /// reason for the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(outcome, Outcome::Fail(vec!["boom"]));
    /// ```
    #[inline]
    pub fn fail(message: M) -> Self {
        Self::Fail(vec![message])
    }

    /// Converts an `Option` into an `Outcome`, failing with the given
    /// message when the option is `None`.
    ///
    /// `Some(x)` becomes `pass(x)`; `None` becomes `fail(message)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome = Outcome::fail_if_none(Some(5), "missing");
    /// assert_eq!(outcome, Outcome::Pass(5, vec![]));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail_if_none(None, "missing");
    /// assert_eq!(outcome, Outcome::Fail(vec!["missing"]));
    /// ```
    #[inline]
    pub fn fail_if_none(option: Option<S>, message: M) -> Self {
        match option {
            Some(value) => Self::pass(value),
            None => Self::fail(message),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Pass` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::pass(42);
    /// assert!(outcome.is_pass());
    /// assert!(!outcome.is_fail());
    /// ```
    #[inline]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(..))
    }

    /// Returns `true` if this is a `Fail` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert!(outcome.is_fail());
    /// assert!(!outcome.is_pass());
    /// ```
    #[inline]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(..))
    }

    // =========================================================================
    // Value and Message Extraction
    // =========================================================================

    /// Converts the `Outcome` into an `Option<S>`, consuming the outcome
    /// and discarding the messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::pass(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(outcome.into_value(), None);
    /// ```
    #[inline]
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Pass(value, _) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::pass(42);
    /// assert_eq!(outcome.value_ref(), Some(&42));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(outcome.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&S> {
        match self {
            Self::Pass(value, _) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Returns the accumulated messages, for either variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Pass(42, vec!["warning"]);
    /// assert_eq!(outcome.messages(), &["warning"]);
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(outcome.messages(), &["boom"]);
    /// ```
    #[inline]
    pub fn messages(&self) -> &[M] {
        match self {
            Self::Pass(_, messages) | Self::Fail(messages) => messages,
        }
    }

    /// Consumes the `Outcome` and returns the accumulated messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Pass(42, vec!["warning"]);
    /// assert_eq!(outcome.into_messages(), vec!["warning"]);
    /// ```
    #[inline]
    pub fn into_messages(self) -> Vec<M> {
        match self {
            Self::Pass(_, messages) | Self::Fail(messages) => messages,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Outcome` by applying one of two functions.
    ///
    /// This is the total case analysis for the type: `on_success` receives
    /// the value and the accumulated messages of a `Pass`, `on_failure`
    /// receives the messages of a `Fail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::pass(42);
    /// let text = outcome.either(
    ///     |value, _| value.to_string(),
    ///     |messages| messages.join(", "),
    /// );
    /// assert_eq!(text, "42");
    ///
    /// let outcome: Outcome<i32, String> = Outcome::fail("boom".to_string());
    /// let text = outcome.either(
    ///     |value, _| value.to_string(),
    ///     |messages| messages.join(", "),
    /// );
    /// assert_eq!(text, "boom");
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, on_success: F, on_failure: G) -> T
    where
        F: FnOnce(S, Vec<M>) -> T,
        G: FnOnce(Vec<M>) -> T,
    {
        match self {
            Self::Pass(value, messages) => on_success(value, messages),
            Self::Fail(messages) => on_failure(messages),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// This is the only operation in the algebra that converts a failure
    /// into an out-of-band fatal signal. Callers who want to stay in the
    /// algebra should avoid it outside top-level unwrap points.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Fail` value. The panic text is every message's
    /// `Display` form joined by a newline and a tab, in message order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::pass(5);
    /// assert_eq!(outcome.return_or_fail(), 5);
    /// ```
    #[inline]
    pub fn return_or_fail(self) -> S
    where
        M: fmt::Display,
    {
        match self {
            Self::Pass(value, _) => value,
            Self::Fail(messages) => {
                let rendered = messages
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n\t");
                panic!("{rendered}")
            }
        }
    }

    // =========================================================================
    // Message Accumulation
    // =========================================================================

    /// Prepends the given messages before the messages already stored.
    ///
    /// The supplied messages come first, then the existing ones, for either
    /// variant. This ordering rule is the building block every sequential
    /// combinator reuses, which keeps message order consistent across the
    /// whole algebra.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Pass(1, vec!["c", "d"]);
    /// let merged = outcome.merge_messages(vec!["a", "b"]);
    /// assert_eq!(merged, Outcome::Pass(1, vec!["a", "b", "c", "d"]));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Fail(vec!["c"]);
    /// let merged = outcome.merge_messages(vec!["a"]);
    /// assert_eq!(merged, Outcome::Fail(vec!["a", "c"]));
    /// ```
    #[inline]
    pub fn merge_messages(self, messages: Vec<M>) -> Self {
        let mut merged = messages;
        match self {
            Self::Pass(value, existing) => {
                merged.extend(existing);
                Self::Pass(value, merged)
            }
            Self::Fail(existing) => {
                merged.extend(existing);
                Self::Fail(merged)
            }
        }
    }

    // =========================================================================
    // Sequential Composition
    // =========================================================================

    /// Applies a function to the success value and merges the accumulated
    /// messages in front of the new outcome's messages.
    ///
    /// If this is a `Fail`, the failure propagates untouched and `function`
    /// is never invoked. This is the short-circuit law of the algebra.
    ///
    /// Chains of `bind` read in pipeline order:
    /// `outcome.bind(step_one).bind(step_two)`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the success value and returns a
    ///   new outcome
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::pass(5).bind(|x| Outcome::pass(x * 2));
    /// assert_eq!(outcome, Outcome::Pass(10, vec![]));
    ///
    /// // Messages thread forward, earlier messages first
    /// let outcome: Outcome<i32, &str> =
    ///     Outcome::Pass(5, vec!["earlier"]).bind(|x| Outcome::Pass(x * 2, vec!["later"]));
    /// assert_eq!(outcome, Outcome::Pass(10, vec!["earlier", "later"]));
    ///
    /// // Failure short-circuits
    /// let outcome: Outcome<i32, &str> = Outcome::<i32, &str>::fail("boom").bind(|x| Outcome::pass(x * 2));
    /// assert_eq!(outcome, Outcome::Fail(vec!["boom"]));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Outcome<T, M>
    where
        F: FnOnce(S) -> Outcome<T, M>,
    {
        match self {
            Self::Pass(value, messages) => function(value).merge_messages(messages),
            Self::Fail(messages) => Outcome::Fail(messages),
        }
    }

    /// Alias for `bind` to match Rust's naming conventions.
    ///
    /// This method is provided for familiarity with Rust's `Option::and_then`
    /// and `Result::and_then` methods.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::pass(5).and_then(|x| Outcome::pass(x + 1));
    /// assert_eq!(outcome, Outcome::Pass(6, vec![]));
    /// ```
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Outcome<T, M>
    where
        F: FnOnce(S) -> Outcome<T, M>,
    {
        self.bind(function)
    }

    // =========================================================================
    // Lifting
    // =========================================================================

    /// Lifts an ordinary function into the algebra and applies it to the
    /// success value.
    ///
    /// Defined as `Outcome::pass(function).apply(self)`: lifting is
    /// applicative application of a message-free function, so messages and
    /// failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Pass(21, vec!["kept"]);
    /// assert_eq!(outcome.lift(|x| x * 2), Outcome::Pass(42, vec!["kept"]));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(outcome.lift(|x| x * 2), Outcome::Fail(vec!["boom"]));
    /// ```
    #[inline]
    pub fn lift<T, F>(self, function: F) -> Outcome<T, M>
    where
        F: FnOnce(S) -> T,
    {
        Outcome::pass(function).apply(self)
    }

    // =========================================================================
    // Side-Effect Hooks
    // =========================================================================

    /// Invokes the function with the success value and messages, then
    /// returns the outcome unchanged.
    ///
    /// The function is called only on `Pass` and only for its side effect,
    /// such as logging. The outcome itself flows through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, &str> = Outcome::pass(42).success_tee(|value, _| {
    ///     seen = Some(*value);
    /// });
    /// assert_eq!(outcome, Outcome::Pass(42, vec![]));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn success_tee<F>(self, function: F) -> Self
    where
        F: FnOnce(&S, &[M]),
    {
        if let Self::Pass(value, messages) = &self {
            function(value, messages.as_slice());
        }
        self
    }

    /// Invokes the function with the error messages, then returns the
    /// outcome unchanged.
    ///
    /// Symmetric to [`success_tee`](Outcome::success_tee): the function is
    /// called only on `Fail`, purely for its side effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom").failure_tee(|messages| {
    ///     seen = messages.to_vec();
    /// });
    /// assert_eq!(outcome, Outcome::Fail(vec!["boom"]));
    /// assert_eq!(seen, vec!["boom"]);
    /// ```
    #[inline]
    pub fn failure_tee<F>(self, function: F) -> Self
    where
        F: FnOnce(&[M]),
    {
        if let Self::Fail(messages) = &self {
            function(messages.as_slice());
        }
        self
    }

    // =========================================================================
    // Sequence Collection
    // =========================================================================

    /// Folds a sequence of outcomes into an outcome of a sequence.
    ///
    /// The fold runs left to right starting from `pass(Vec::new())`. If every
    /// input is a `Pass`, the result is `Pass` with the values in input order
    /// and all messages in fold order. If any input is a `Fail`, the result
    /// is `Fail` - and message accumulation continues through the remainder
    /// of the sequence rather than stopping at the first failure, so the
    /// caller sees every message the inputs produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let collected = Outcome::collect(vec![
    ///     Outcome::<i32, &str>::pass(1),
    ///     Outcome::Pass(2, vec!["m"]),
    ///     Outcome::pass(3),
    /// ]);
    /// assert_eq!(collected, Outcome::Pass(vec![1, 2, 3], vec!["m"]));
    ///
    /// let collected = Outcome::collect(vec![
    ///     Outcome::<i32, &str>::pass(1),
    ///     Outcome::Fail(vec!["x"]),
    ///     Outcome::Pass(3, vec!["y"]),
    /// ]);
    /// assert_eq!(collected, Outcome::Fail(vec!["x", "y"]));
    /// ```
    pub fn collect<I>(outcomes: I) -> Outcome<Vec<S>, M>
    where
        I: IntoIterator<Item = Self>,
    {
        outcomes
            .into_iter()
            .fold(Outcome::pass(Vec::new()), |accumulator, next| {
                match (accumulator, next) {
                    (Outcome::Pass(mut values, mut messages), Self::Pass(value, extra)) => {
                        values.push(value);
                        messages.extend(extra);
                        Outcome::Pass(values, messages)
                    }
                    (Outcome::Pass(_, mut messages), Self::Fail(extra))
                    | (Outcome::Fail(mut messages), Self::Pass(_, extra) | Self::Fail(extra)) => {
                        messages.extend(extra);
                        Outcome::Fail(messages)
                    }
                }
            })
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a standard `Result`, discarding the messages of a
    /// `Pass`.
    ///
    /// `Pass(value, _)` becomes `Ok(value)`; `Fail(messages)` becomes
    /// `Err(messages)`. Success messages do not survive this conversion;
    /// read them first via [`messages`](Outcome::messages) if they matter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::pass(42);
    /// assert_eq!(outcome.into_result(), Ok(42));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(outcome.into_result(), Err(vec!["boom"]));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, Vec<M>> {
        match self {
            Self::Pass(value, _) => Ok(value),
            Self::Fail(messages) => Err(messages),
        }
    }
}

// =============================================================================
// Applicative Composition
// =============================================================================

impl<F, M> Outcome<F, M> {
    /// Combines an outcome holding a function with an outcome holding a
    /// value.
    ///
    /// Unlike [`bind`](Outcome::bind), both sides are independent: neither
    /// depends on the other's success, and there is no short-circuit. The
    /// four cases are:
    ///
    /// | `self`         | `value`        | output                  |
    /// |----------------|----------------|-------------------------|
    /// | `Pass(f, m1)`  | `Pass(x, m2)`  | `Pass(f(x), m1 ++ m2)`  |
    /// | `Fail(e1)`     | `Pass(_, m2)`  | `Fail(e1 ++ m2)`        |
    /// | `Pass(_, m1)`  | `Fail(e2)`     | `Fail(e2 ++ m1)`        |
    /// | `Fail(e1)`     | `Fail(e2)`     | `Fail(e1 ++ e2)`        |
    ///
    /// The mixed cases concatenate asymmetrically: when only the value side
    /// failed, its error messages come first and the function side's
    /// trailing messages follow. Applicative composition makes no claim
    /// about evaluation order, and this table is the fixed contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let wrapped: Outcome<_, &str> = Outcome::pass(|x: i32| x + 1);
    /// assert_eq!(wrapped.apply(Outcome::pass(41)), Outcome::Pass(42, vec![]));
    ///
    /// // Mixed failure: the value side's errors come first
    /// let wrapped: Outcome<fn(i32) -> i32, &str> = Outcome::Pass(|x| x + 1, vec!["m1"]);
    /// assert_eq!(
    ///     wrapped.apply(Outcome::Fail(vec!["e2"])),
    ///     Outcome::Fail(vec!["e2", "m1"]),
    /// );
    ///
    /// // Both failed: all errors survive, left side first
    /// let wrapped: Outcome<fn(i32) -> i32, &str> = Outcome::Fail(vec!["e1"]);
    /// assert_eq!(
    ///     wrapped.apply(Outcome::Fail(vec!["e2"])),
    ///     Outcome::Fail(vec!["e1", "e2"]),
    /// );
    /// ```
    pub fn apply<S, T>(self, value: Outcome<S, M>) -> Outcome<T, M>
    where
        F: FnOnce(S) -> T,
    {
        match (self, value) {
            (Self::Pass(function, mut messages), Outcome::Pass(value, extra)) => {
                let applied = function(value);
                messages.extend(extra);
                Outcome::Pass(applied, messages)
            }
            (Self::Fail(mut errors), Outcome::Pass(_, extra)) => {
                errors.extend(extra);
                Outcome::Fail(errors)
            }
            (Self::Pass(_, trailing), Outcome::Fail(mut errors)) => {
                errors.extend(trailing);
                Outcome::Fail(errors)
            }
            (Self::Fail(mut errors), Outcome::Fail(extra)) => {
                errors.extend(extra);
                Outcome::Fail(errors)
            }
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<S: fmt::Debug, M: fmt::Debug> fmt::Debug for Outcome<S, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(value, messages) => formatter
                .debug_tuple("Pass")
                .field(value)
                .field(messages)
                .finish(),
            Self::Fail(messages) => formatter.debug_tuple("Fail").field(messages).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<S, M> From<Result<S, M>> for Outcome<S, M> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes `pass(value)`, and `Err(error)` becomes
    /// `fail(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, Outcome::Pass(42, vec![]));
    ///
    /// let err: Result<i32, String> = Err("error".to_string());
    /// let outcome: Outcome<i32, String> = err.into();
    /// assert_eq!(outcome, Outcome::Fail(vec!["error".to_string()]));
    /// ```
    #[inline]
    fn from(result: Result<S, M>) -> Self {
        match result {
            Ok(value) => Self::pass(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<S, M> FromIterator<Outcome<S, M>> for Outcome<Vec<S>, M> {
    /// Collects an iterator of outcomes into an outcome of a `Vec`.
    ///
    /// Delegates to [`Outcome::collect`], so messages accumulate through
    /// failures and values keep their input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcomes = vec![Outcome::<i32, &str>::pass(1), Outcome::pass(2)];
    /// let collected: Outcome<Vec<i32>, &str> = outcomes.into_iter().collect();
    /// assert_eq!(collected, Outcome::Pass(vec![1, 2], vec![]));
    /// ```
    #[inline]
    fn from_iter<I: IntoIterator<Item = Outcome<S, M>>>(iter: I) -> Self {
        Outcome::collect(iter)
    }
}

// =============================================================================
// Compile-Time Trait Coverage
// =============================================================================

static_assertions::assert_impl_all!(Outcome<i32, String>: Clone, PartialEq, Send, Sync);
