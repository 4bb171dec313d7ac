//! The [`Outcome`] container: the result of a computation, either a value or the [`Reason`] it
//! failed.
//!
//! # Error Handling
//! This module deliberately has a single failure kind, [`Reason`]. Callers put whatever they like
//! in its message, or convert an existing [`Error`](std::error::Error) with
//! [`Reason::from_error`]. A failed Outcome can never be missing its reason, constructing one
//! without a reason stores [`Reason::EMPTY`] instead.

pub mod outcome;
pub mod reason;


#[doc(inline)]
pub use outcome::Outcome;
#[doc(inline)]
pub use reason::Reason;
