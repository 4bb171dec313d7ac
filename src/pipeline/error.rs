use derive_more::{Display, Error, From};
use tokio::sync::mpsc::error::SendError;
use tokio::task::JoinError;

use crate::option::Optional;

#[derive(Debug, Display, Error)]
#[display("pipeline input is closed")]
pub struct ClosedError;

impl<T> From<SendError<T>> for ClosedError {
    fn from(_: SendError<T>) -> Self {
        ClosedError
    }
}

#[derive(Debug, Display, Error)]
#[display("pipeline stage stopped abnormally")]
pub struct StageFailedError;

impl From<JoinError> for StageFailedError {
    fn from(_: JoinError) -> Self {
        StageFailedError
    }
}

#[derive(Debug, Display, From, Error)]
pub enum PipelineError {
    Closed(ClosedError),
    StageFailed(StageFailedError),
}

/// A [`PipelineError`] raised while draining, along with every output that was produced before
/// the failure.
#[derive(Debug, Display)]
#[display("{error}")]
pub struct DrainError<U> {
    pub error: PipelineError,
    pub recovered: Vec<Optional<U>>,
}
