use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use super::{DrainError, StageFailedError};
use crate::option::Optional;

/// The output end of a [`Pipeline`](super::Pipeline). It also owns the stage tasks, so it can wait
/// for them to finish.
#[derive(Debug)]
pub struct Source<U> {
    pub(crate) receiver: Receiver<Optional<U>>,
    pub(crate) stages: Vec<JoinHandle<()>>,
}

impl<U> Source<U> {
    /// Waits for the next output. Returns `None` once the input has been closed and every
    /// submitted item has come out the other end.
    pub async fn recv(&mut self) -> Option<Optional<U>> {
        self.receiver.recv().await
    }

    /// Waits for the next output from synchronous code.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn recv_blocking(&mut self) -> Option<Optional<U>> {
        self.receiver.blocking_recv()
    }

    /// Collects every remaining output, then waits for all stage tasks to finish.
    ///
    /// This only completes once the matching [`Sink`](super::Sink) has been closed or dropped.
    /// If a stage failed, the outputs produced before the failure are returned in the
    /// [`DrainError`].
    pub async fn drain(mut self) -> Result<Vec<Optional<U>>, DrainError<U>> {
        let mut remaining = Vec::new();
        while let Some(item) = self.receiver.recv().await {
            remaining.push(item);
        }

        for stage in self.stages {
            if let Err(error) = stage.await {
                return Err(DrainError {
                    error: StageFailedError::from(error).into(),
                    recovered: remaining,
                });
            }
        }

        Ok(remaining)
    }
}
