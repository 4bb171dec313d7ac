//! The [`Optional`] container: a value, or nothing.
//!
//! # Method
//! The state of an Optional is kept in a private enum, so there is no way to pattern match on it
//! from outside this module. Every question about the state goes through
//! [`dispatch`](Optional::dispatch), which takes one closure per state and runs exactly one of
//! them. The combinators are all written in terms of that single primitive.

pub mod optional;


#[doc(inline)]
pub use optional::Optional;
