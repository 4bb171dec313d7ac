use tokio::sync::mpsc;

use super::stage::run_stage;
use super::{DrainError, PipelineError, Sink, Source};
use crate::option::Optional;

/// A chain of transformation stages, each running on its own tokio task, fed with [`Optional`]
/// values.
///
/// A Pipeline built from `f: T -> U` turns every present `v` it is sent into present `f(v)`, and
/// every absent item into an absent item without calling `f`. Outputs come out in exactly the
/// order inputs were sent, nothing is dropped or reordered. More stages can be attached with
/// [`then`](Pipeline::then).
///
/// Each stage boundary is a bounded channel, so [`send`](Pipeline::send) waits when the stages
/// fall behind. Shutdown is explicit: [`close`](Pipeline::close) the input and keep receiving
/// until [`recv`](Pipeline::recv) returns `None`, or call [`drain`](Pipeline::drain) to do both
/// and wait for the stage tasks. Dropping a Pipeline closes its input too, so the stages still
/// wind down on their own.
///
/// # Examples
/// ```
/// use dispatch_types::option::Optional;
/// use dispatch_types::pipeline::Pipeline;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut pipeline = Pipeline::new(|x: i32| x != 0).then(|b: bool| b.to_string());
///
/// pipeline.send(Optional::present(1)).await.unwrap();
/// assert_eq!(pipeline.recv().await, Some(Optional::present(String::from("true"))));
/// # });
/// ```
#[derive(Debug)]
pub struct Pipeline<T, U> {
    sink: Sink<T>,
    source: Source<U>,
    cap: usize,
}

impl<T: Send + 'static, U: Send + 'static> Pipeline<T, U> {
    /// The capacity of each channel between stages when none is provided.
    pub const DEFAULT_CAP: usize = 16;

    /// Creates a single-stage Pipeline applying `transform` to every present item, using
    /// [`DEFAULT_CAP`](Pipeline::DEFAULT_CAP) for its channels.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn new<F>(transform: F) -> Pipeline<T, U>
    where
        F: Fn(T) -> U + Send + 'static,
    {
        Pipeline::with_cap(Self::DEFAULT_CAP, transform)
    }

    /// Creates a single-stage Pipeline whose channels hold up to `cap` items each.
    ///
    /// # Panics
    /// Panics if `cap` is 0 or if called outside of a tokio runtime.
    pub fn with_cap<F>(cap: usize, transform: F) -> Pipeline<T, U>
    where
        F: Fn(T) -> U + Send + 'static,
    {
        assert!(cap > 0, "Pipeline capacity must be greater than 0!");

        let (input, first) = mpsc::channel(cap);
        let (last, output) = mpsc::channel(cap);
        let stage = tokio::spawn(run_stage(0, first, last, transform));

        Pipeline {
            sink: Sink::new(input),
            source: Source {
                receiver: output,
                stages: vec![stage],
            },
            cap,
        }
    }

    /// Attaches another stage, applying `transform` to every present output of this Pipeline.
    /// The returned Pipeline takes the same inputs and produces the new stage's outputs.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn then<V, F>(self, transform: F) -> Pipeline<T, V>
    where
        V: Send + 'static,
        F: Fn(U) -> V + Send + 'static,
    {
        let Pipeline { sink, source, cap } = self;
        let Source {
            receiver,
            mut stages,
        } = source;

        let (last, output) = mpsc::channel(cap);
        stages.push(tokio::spawn(run_stage(stages.len(), receiver, last, transform)));

        Pipeline {
            sink,
            source: Source {
                receiver: output,
                stages,
            },
            cap,
        }
    }
}

impl<T, U> Pipeline<T, U> {
    /// Sends `item` into the first stage, waiting while the first channel is full.
    pub async fn send(&self, item: Optional<T>) -> Result<(), PipelineError> {
        self.sink.send(item).await
    }

    /// Sends `item` from synchronous code.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn send_blocking(&self, item: Optional<T>) -> Result<(), PipelineError> {
        self.sink.send_blocking(item)
    }

    /// Waits for the next output. Returns `None` after the input is closed and all items sent
    /// before that have been received.
    pub async fn recv(&mut self) -> Option<Optional<U>> {
        self.source.recv().await
    }

    /// Waits for the next output from synchronous code.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn recv_blocking(&mut self) -> Option<Optional<U>> {
        self.source.recv_blocking()
    }

    /// Closes the input. Items already sent are still processed and can still be received.
    pub fn close(&mut self) {
        self.sink.close()
    }

    /// Closes the input, collects all outputs that haven't been received yet and waits for every
    /// stage task to finish. Outputs produced before a stage failure are kept in the
    /// [`DrainError`].
    pub async fn drain(mut self) -> Result<Vec<Optional<U>>, DrainError<U>> {
        self.sink.close();
        self.source.drain().await
    }

    /// Separates the Pipeline into its input and output ends, so they can be used from different
    /// tasks.
    pub fn split(self) -> (Sink<T>, Source<U>) {
        (self.sink, self.source)
    }

    /// Returns the capacity of each channel between stages.
    pub const fn cap(&self) -> usize {
        self.cap
    }
}
