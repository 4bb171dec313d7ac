use std::borrow::Cow;
use std::error::Error;

use derive_more::{Display, Error};

/// Why a computation failed.
///
/// A Reason is opaque apart from its human-readable message. It implements [`Error`] itself, so
/// it can be returned anywhere a boxed error is expected.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, Hash)]
#[display("{message}")]
pub struct Reason {
    message: Cow<'static, str>,
}

impl Reason {
    /// The canonical reason with an empty message, used for failures constructed without one.
    pub const EMPTY: Reason = Reason {
        message: Cow::Borrowed(""),
    };

    /// Creates a Reason with the provided `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Reason {
        Reason {
            message: message.into(),
        }
    }

    /// Captures `error` as a Reason. The message is the error's own message followed by those of
    /// its sources, separated by `": "`.
    pub fn from_error<E: Error + ?Sized>(error: &E) -> Reason {
        let mut message = error.to_string();
        let mut source = error.source();

        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        Reason::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this Reason has no message, like [`Reason::EMPTY`].
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl Default for Reason {
    fn default() -> Self {
        Reason::EMPTY
    }
}

impl From<&'static str> for Reason {
    fn from(value: &'static str) -> Self {
        Reason::new(value)
    }
}

impl From<String> for Reason {
    fn from(value: String) -> Self {
        Reason::new(value)
    }
}
