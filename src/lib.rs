//! # railway
//!
//! A railway-oriented programming library for Rust providing a two-track
//! result type with message accumulation and monadic composition.
//!
//! ## Overview
//!
//! Railway-oriented programming models a computation as a train running on
//! two parallel tracks: a success track and a failure track. Every step
//! either keeps the train on the success track (possibly attaching
//! informational messages along the way) or switches it onto the failure
//! track, after which downstream steps are skipped and only error messages
//! keep accumulating. This library provides:
//!
//! - **[`Outcome`](outcome::Outcome)**: the two-track sum type, carrying a
//!   success value plus accumulated messages, or one or more error messages
//! - **Composition**: `bind`, `apply`, and `lift` for sequential and
//!   independent combination of fallible computations
//! - **Aggregation**: `collect` for folding a sequence of outcomes into an
//!   outcome of a sequence, accumulating every message along the way
//! - **Observation**: `success_tee` and `failure_tee` passthrough hooks for
//!   attaching side effects such as logging
//! - **Notation**: the [`rail!`] macro for do-notation style sequential
//!   composition
//!
//! ## Feature Flags
//!
//! - `compose`: the [`rail!`] do-notation macro (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` implementations for [`Outcome`](outcome::Outcome)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::outcome::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::fail_if_none(input.parse().ok(), format!("not a number: {input}"))
//! }
//!
//! fn positive(value: i32) -> Outcome<i32, String> {
//!     if value > 0 {
//!         Outcome::pass(value)
//!     } else {
//!         Outcome::fail(format!("not positive: {value}"))
//!     }
//! }
//!
//! let outcome = parse("42").bind(positive).lift(|value| value * 2);
//! assert_eq!(outcome, Outcome::Pass(84, vec![]));
//!
//! let outcome = parse("zero").bind(positive);
//! assert_eq!(outcome, Outcome::Fail(vec!["not a number: zero".to_string()]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and macros.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    pub use crate::outcome::Outcome;

    #[cfg(feature = "compose")]
    pub use crate::rail;
}

pub mod outcome;

#[cfg(feature = "compose")]
mod rail_macro;
