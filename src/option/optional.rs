use std::fmt::{self, Debug, Formatter};
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State<T> {
    Present(T),
    Absent,
}

/// A value of type `T`, or nothing.
///
/// An Optional is either present (holding a value) or absent. Unlike [`Option`], its variants
/// aren't public, the only way to get at the value is [`dispatch`](Optional::dispatch), which
/// forces both cases to be handled at every use site.
///
/// `T` can be any type, including another Optional (see [`flatten`](Optional::flatten)).
///
/// # Examples
/// ```
/// use dispatch_types::option::Optional;
///
/// let described = Optional::present(3).dispatch(|v| format!("got {v}"), || "nothing".into());
/// assert_eq!(described, "got 3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(State<T>);

impl<T> Optional<T> {
    /// Creates a present Optional holding `value`.
    pub const fn present(value: T) -> Optional<T> {
        Optional(State::Present(value))
    }

    /// Creates an absent Optional.
    pub const fn absent() -> Optional<T> {
        Optional(State::Absent)
    }

    /// Unpacks the Optional, calling `on_present` with the value if there is one, or `on_absent`
    /// otherwise. Exactly one of the two closures runs and its return value is returned.
    pub fn dispatch<U>(self, on_present: impl FnOnce(T) -> U, on_absent: impl FnOnce() -> U) -> U {
        match self.0 {
            State::Present(value) => on_present(value),
            State::Absent => on_absent(),
        }
    }

    /// Applies `f` to the contained value, producing a new Optional with the result. An absent
    /// Optional stays absent and `f` is never called.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        self.dispatch(|value| Optional::present(f(value)), Optional::absent)
    }

    /// Applies `f` to the contained value and returns whatever Optional it produces. Unlike
    /// [`map`](Optional::map), `f` returns a container itself, so there is no nesting.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        self.dispatch(f, Optional::absent)
    }

    /// Runs the provided `stages` in order, each one receiving the value produced by the one
    /// before it.
    ///
    /// As soon as a stage produces an absent Optional, the chain stops and no later stage is
    /// called. An absent input calls no stage at all, and an empty chain returns the input
    /// unchanged.
    pub fn run_chain<I, F>(self, stages: I) -> Optional<T>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Optional<T>,
    {
        let flow = stages.into_iter().try_fold(self, |current, stage| {
            current.dispatch(
                |value| ControlFlow::Continue(stage(value)),
                || ControlFlow::Break(()),
            )
        });

        match flow {
            ControlFlow::Continue(last) => last,
            ControlFlow::Break(()) => Optional::absent(),
        }
    }

    /// Keeps the value only if `predicate` returns true for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Optional<T> {
        self.bind(|value| {
            if predicate(&value) {
                Optional::present(value)
            } else {
                Optional::absent()
            }
        })
    }

    /// Returns this Optional if it is present, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        self.dispatch(Optional::present, || other)
    }

    /// Returns the contained value, or `default` if absent.
    pub fn unwrap_or(self, default: T) -> T {
        self.dispatch(|value| value, || default)
    }

    /// Returns the contained value, or computes one with `f` if absent.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        self.dispatch(|value| value, f)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting. Absent on the outside or the inside both give absent.
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<F> Optional<F> {
    /// Applies the contained function to the value in `optional`. The result is only present
    /// when both the function and the value are present.
    pub fn apply<T, U>(self, optional: Optional<T>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|f| optional.map(f))
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::absent()
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::present(value),
            None => Optional::absent(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.dispatch(Some, || None)
    }
}
