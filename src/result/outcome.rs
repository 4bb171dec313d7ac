use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::ops::ControlFlow;

use super::Reason;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(Reason),
}

/// The result of a computation: a value of type `T` on success, or the [`Reason`] it failed.
///
/// As with [`Optional`](crate::option::Optional), the state is private and can only be observed
/// through [`dispatch`](Outcome::dispatch).
///
/// # Examples
/// ```
/// use dispatch_types::result::{Outcome, Reason};
///
/// let render = |outcome: Outcome<u32>| {
///     outcome.dispatch(|v| v.to_string(), |e| e.message().to_owned())
/// };
/// assert_eq!(render(Outcome::success(6)), "6");
/// assert_eq!(render(Outcome::failure(Reason::new("oops!"))), "oops!");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T>(State<T>);

impl<T> Outcome<T> {
    /// Creates a successful Outcome holding `value`.
    pub const fn success(value: T) -> Outcome<T> {
        Outcome(State::Success(value))
    }

    /// Creates a failed Outcome. Passing `None` stores [`Reason::EMPTY`], so a failure always
    /// has a reason to report.
    pub fn failure(reason: impl Into<Option<Reason>>) -> Outcome<T> {
        Outcome(State::Failure(reason.into().unwrap_or(Reason::EMPTY)))
    }

    /// Creates a failed Outcome from any [`Error`], see [`Reason::from_error`].
    pub fn from_error<E: Error + ?Sized>(error: &E) -> Outcome<T> {
        Outcome::failure(Reason::from_error(error))
    }

    /// Unpacks the Outcome, calling `on_success` with the value or `on_failure` with the reason.
    /// Exactly one of the two closures runs and its return value is returned.
    pub fn dispatch<U>(
        self,
        on_success: impl FnOnce(T) -> U,
        on_failure: impl FnOnce(Reason) -> U,
    ) -> U {
        match self.0 {
            State::Success(value) => on_success(value),
            State::Failure(reason) => on_failure(reason),
        }
    }

    /// Applies `f` to a successful value. A failure is passed through with its reason intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        self.dispatch(|value| Outcome::success(f(value)), |reason| Outcome::failure(reason))
    }

    /// Replaces the reason of a failure with the one produced by `f`.
    pub fn map_reason(self, f: impl FnOnce(Reason) -> Reason) -> Outcome<T> {
        self.dispatch(Outcome::success, |reason| Outcome::failure(f(reason)))
    }

    /// Applies `f` to a successful value and returns the Outcome it produces.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        self.dispatch(f, |reason| Outcome::failure(reason))
    }

    /// Runs the provided `stages` in order, stopping at the first failure. No stage runs after a
    /// failure and the failure's reason is what the chain returns.
    pub fn run_chain<I, F>(self, stages: I) -> Outcome<T>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Outcome<T>,
    {
        let flow = stages.into_iter().try_fold(self, |current, stage| {
            current.dispatch(|value| ControlFlow::Continue(stage(value)), ControlFlow::Break)
        });

        match flow {
            ControlFlow::Continue(last) => last,
            ControlFlow::Break(reason) => Outcome::failure(reason),
        }
    }

    /// Returns the successful value, or computes one from the reason with `f`.
    pub fn unwrap_or_else(self, f: impl FnOnce(Reason) -> T) -> T {
        self.dispatch(|value| value, f)
    }
}

impl<F> Outcome<F> {
    /// Applies the contained function to the value in `outcome`. If both have failed, the reason
    /// of the function's Outcome wins.
    pub fn apply<T, U>(self, outcome: Outcome<T>) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|f| outcome.map(f))
    }
}

impl<T: Debug> Debug for Outcome<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<T, E: Error> From<Result<T, E>> for Outcome<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::from_error(&error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Reason> {
    fn from(value: Outcome<T>) -> Self {
        value.dispatch(Ok, Err)
    }
}
