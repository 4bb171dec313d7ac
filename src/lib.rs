//! Small container types that make callers handle every state of a value explicitly.
//!
//! # Purpose
//! [`Optional`](option::Optional) holds a value or nothing, [`Outcome`](result::Outcome) holds a
//! value or the [`Reason`](result::Reason) a computation failed. Neither exposes its state
//! directly: the only way in is `dispatch`, which takes one closure per state and runs exactly
//! one of them. The usual combinators (`map`, `apply`, `bind`, `run_chain`) are all built from
//! `dispatch` alone.
//!
//! The [`pipeline`] module wires transformations into a chain of tokio tasks that pass
//! [`Optional`](option::Optional) values along in order. It's a simple sequential composition
//! helper, not a scheduler.
//!
//! # Error Handling
//! [`Outcome`](result::Outcome) has a single failure kind, [`Reason`](result::Reason), which is
//! never missing. Pipeline errors are strongly typed enums over small structs that implement
//! [`Error`](std::error::Error).
//!
//! # Features
//! Each module sits behind a Cargo feature of the same name, all enabled by default. The
//! `pipeline` feature pulls in `tokio` and `tracing`, the containers have no runtime
//! dependencies beyond the derive macros.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "option")]
pub mod option;
#[cfg(feature = "pipeline")]
pub mod pipeline;
#[cfg(feature = "result")]
pub mod result;

pub(crate) mod util;
