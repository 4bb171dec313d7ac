//! A sequential, channel-backed [`Pipeline`] of transformation stages over [`Optional`] values.
//!
//! # Method
//! Every stage is a single tokio task that owns the receiving end of its input channel, the
//! sending end of its output channel and the transformation itself. Items are handled one at a
//! time, so outputs come out in the order inputs went in. Absent items are forwarded without
//! calling the transformation.
//!
//! Closing the input (explicitly or by dropping the [`Sink`]) lets each stage finish the items
//! it was already given and then close its own output, so the shutdown travels down the chain.
//!
//! [`Optional`]: crate::option::Optional

pub mod error;
pub mod pipeline;
pub mod sink;
pub mod source;

mod stage;
mod tests;

pub use error::*;
#[doc(inline)]
pub use pipeline::Pipeline;
#[doc(inline)]
pub use sink::Sink;
#[doc(inline)]
pub use source::Source;
