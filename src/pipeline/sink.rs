use tokio::sync::mpsc::Sender;
use tracing::debug;

use super::{ClosedError, PipelineError};
use crate::option::Optional;

/// The input end of a [`Pipeline`](super::Pipeline).
///
/// Dropping the Sink has the same effect as [`close`](Sink::close).
#[derive(Debug)]
pub struct Sink<T> {
    pub(crate) sender: Option<Sender<Optional<T>>>,
}

impl<T> Sink<T> {
    pub(crate) const fn new(sender: Sender<Optional<T>>) -> Sink<T> {
        Sink {
            sender: Some(sender),
        }
    }

    /// Submits `item` to the first stage, waiting for room if the hand-off buffer is full.
    pub async fn send(&self, item: Optional<T>) -> Result<(), PipelineError> {
        let sender = self.sender.as_ref().ok_or(ClosedError)?;
        sender.send(item).await.map_err(ClosedError::from)?;
        Ok(())
    }

    /// Submits `item` from synchronous code, blocking the current thread while the buffer is
    /// full.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn send_blocking(&self, item: Optional<T>) -> Result<(), PipelineError> {
        let sender = self.sender.as_ref().ok_or(ClosedError)?;
        sender.blocking_send(item).map_err(ClosedError::from)?;
        Ok(())
    }

    /// Signals that no more items will be sent. Items already submitted are still processed.
    /// Closing an already closed Sink does nothing.
    pub fn close(&mut self) {
        if self.sender.take().is_some() {
            debug!("pipeline input closed");
        }
    }

    pub const fn is_closed(&self) -> bool {
        self.sender.is_none()
    }
}
